//! Alloy HTTP provider setup

use alloy::{
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::{client::RpcClient, types::eth::TransactionRequest},
    transports::{BoxTransport, http::Http},
};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::warn;
use crate::{
    errors::{TrackerError, TrackerResult},
    network::ChainClient,
};

pub struct AlloyChainClient {
    endpoint: String,
    provider: RootProvider<BoxTransport>,
}

impl AlloyChainClient {
    /// Builds the provider; no request is sent until the first call.
    pub fn new(rpc_url: &str, request_timeout: Duration) -> TrackerResult<Self> {
        let url: reqwest::Url = rpc_url.parse().map_err(|e| TrackerError::Connection {
            endpoint: rpc_url.to_string(),
            source: anyhow::anyhow!("invalid RPC URL: {}", e),
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| {
                warn!("⚠️ Failed to initialize HTTP client: {}", e);
                TrackerError::Connection {
                    endpoint: rpc_url.to_string(),
                    source: e.into(),
                }
            })?;

        let transport = Http::with_client(http_client, url);
        let provider = ProviderBuilder::new()
            .on_client(RpcClient::new(transport, false))
            .boxed();

        Ok(Self {
            endpoint: rpc_url.to_string(),
            provider,
        })
    }
}

impl ChainClient for AlloyChainClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .context("Failed to get chain id")
    }

    async fn latest_block_number(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .context("Failed to get block number")
    }

    async fn call(&self, contract: Address, calldata: Bytes) -> Result<Bytes> {
        let tx = TransactionRequest::default()
            .to(contract)
            .input(calldata.into());

        self.provider
            .call(&tx)
            .await
            .with_context(|| format!("eth_call to {} failed", contract))
    }
}
