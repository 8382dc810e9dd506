//! The RPC surface the tracker depends on

use alloy::primitives::{Address, Bytes};
use anyhow::Result;
use std::future::Future;

/// Read-only access to a chain. The poll loop is the only caller, one request at a time.
pub trait ChainClient: Send + Sync {
    fn endpoint(&self) -> &str;

    /// True iff `eth_blockNumber` answers.
    fn is_connected(&self) -> impl Future<Output = bool> + Send {
        async move { self.latest_block_number().await.is_ok() }
    }

    fn chain_id(&self) -> impl Future<Output = Result<u64>> + Send;

    fn latest_block_number(&self) -> impl Future<Output = Result<u64>> + Send;

    /// `eth_call` against the latest block, returning the raw ABI-encoded result.
    fn call(&self, contract: Address, calldata: Bytes) -> impl Future<Output = Result<Bytes>> + Send;
}
