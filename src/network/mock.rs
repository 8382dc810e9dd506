//! Scripted in-memory chain client for tests

use alloy::{
    primitives::{Address, Bytes, aliases::U112},
    sol_types::SolCall,
};
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::network::{ChainClient, IERC20Metadata, IUniswapV2Pair};

#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    Err(String),
    /// Never resolves, like a request stuck on the wire.
    Stall,
}

impl<T> From<Result<T, String>> for Reply<T> {
    fn from(value: Result<T, String>) -> Self {
        match value {
            Ok(v) => Reply::Ok(v),
            Err(e) => Reply::Err(e),
        }
    }
}

/// Replies are consumed in order; the last one repeats once the script runs out.
struct Script<T> {
    replies: Vec<Reply<T>>,
    cursor: usize,
}

impl<T: Clone> Script<T> {
    fn next(&mut self) -> Option<Reply<T>> {
        let reply = self.replies.get(self.cursor).or_else(|| self.replies.last())?.clone();
        self.cursor += 1;
        Some(reply)
    }
}

pub struct MockChainClient {
    connected: bool,
    chain_id: u64,
    blocks: Mutex<Script<u64>>,
    calls: Mutex<HashMap<(Address, [u8; 4]), Script<Bytes>>>,
    call_count: AtomicUsize,
    block_requests: AtomicUsize,
}

impl MockChainClient {
    pub fn new() -> Self {
        Self {
            connected: true,
            chain_id: 1,
            blocks: Mutex::new(Script { replies: vec![Reply::Ok(19_000_000)], cursor: 0 }),
            calls: Mutex::new(HashMap::new()),
            call_count: AtomicUsize::new(0),
            block_requests: AtomicUsize::new(0),
        }
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    pub fn with_blocks(self, replies: Vec<Reply<u64>>) -> Self {
        *self.blocks.lock().unwrap() = Script { replies, cursor: 0 };
        self
    }

    pub fn on_call(self, contract: Address, selector: [u8; 4], reply: Result<Bytes, String>) -> Self {
        self.on_call_sequence(contract, selector, vec![reply.into()])
    }

    pub fn on_call_sequence(self, contract: Address, selector: [u8; 4], replies: Vec<Reply<Bytes>>) -> Self {
        self.calls
            .lock()
            .unwrap()
            .insert((contract, selector), Script { replies, cursor: 0 });
        self
    }

    /// A pair whose token calls answer with the given tokens and metadata.
    pub fn with_pair(
        self,
        pair: Address,
        token0: (Address, &str, u8),
        token1: (Address, &str, u8),
    ) -> Self {
        let mut client = self
            .on_call(pair, IUniswapV2Pair::token0Call::SELECTOR, Ok(Self::encode_address(token0.0)))
            .on_call(pair, IUniswapV2Pair::token1Call::SELECTOR, Ok(Self::encode_address(token1.0)));
        for (token, symbol, decimals) in [token0, token1] {
            client = client
                .on_call(token, IERC20Metadata::symbolCall::SELECTOR, Ok(Self::encode_symbol(symbol)))
                .on_call(token, IERC20Metadata::decimalsCall::SELECTOR, Ok(Self::encode_decimals(decimals)));
        }
        client
    }

    pub fn block_requests(&self) -> usize {
        self.block_requests.load(Ordering::SeqCst)
    }

    pub fn calls_made(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn encode_address(address: Address) -> Bytes {
        IUniswapV2Pair::token0Call::abi_encode_returns(&(address,)).into()
    }

    pub fn encode_symbol(symbol: &str) -> Bytes {
        IERC20Metadata::symbolCall::abi_encode_returns(&(symbol.to_string(),)).into()
    }

    pub fn encode_decimals(decimals: u8) -> Bytes {
        IERC20Metadata::decimalsCall::abi_encode_returns(&(decimals,)).into()
    }

    pub fn encode_reserves(reserve0: u128, reserve1: u128, timestamp_last: u32) -> Bytes {
        IUniswapV2Pair::getReservesCall::abi_encode_returns(&(
            U112::from(reserve0),
            U112::from(reserve1),
            timestamp_last,
        ))
        .into()
    }
}

async fn resolve<T>(reply: Option<Reply<T>>, what: &str) -> Result<T> {
    match reply {
        Some(Reply::Ok(value)) => Ok(value),
        Some(Reply::Err(message)) => Err(anyhow!(message)),
        Some(Reply::Stall) => std::future::pending().await,
        None => Err(anyhow!("execution reverted: no reply scripted for {}", what)),
    }
}

impl ChainClient for MockChainClient {
    fn endpoint(&self) -> &str {
        "mock://chain"
    }

    async fn chain_id(&self) -> Result<u64> {
        if self.connected {
            Ok(self.chain_id)
        } else {
            Err(anyhow!("connection refused"))
        }
    }

    async fn latest_block_number(&self) -> Result<u64> {
        self.block_requests.fetch_add(1, Ordering::SeqCst);
        if !self.connected {
            return Err(anyhow!("connection refused"));
        }
        let reply = self.blocks.lock().unwrap().next();
        resolve(reply, "eth_blockNumber").await
    }

    async fn call(&self, contract: Address, calldata: Bytes) -> Result<Bytes> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if !self.connected {
            return Err(anyhow!("connection refused"));
        }
        let mut selector = [0u8; 4];
        if let Some(prefix) = calldata.get(..4) {
            selector.copy_from_slice(prefix);
        }
        let reply = self
            .calls
            .lock()
            .unwrap()
            .get_mut(&(contract, selector))
            .and_then(Script::next);
        resolve(reply, "eth_call").await
    }
}
