//! Connectivity check run once before the pair is resolved

use tracing::info;
use crate::{
    errors::{TrackerError, TrackerResult},
    network::ChainClient,
    utils::print_connection_status,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub chain_id: Option<u64>,
    pub latest_block: u64,
}

/// Sends a single `eth_blockNumber`. Its outcome drives both the printed
/// status and whether startup continues.
pub async fn check_connection<C>(client: &C) -> TrackerResult<ConnectionStatus>
where
    C: ChainClient,
{
    info!("🔗 Testing connection to {}...", client.endpoint());

    match client.latest_block_number().await {
        Ok(latest_block) => {
            let chain_id = client.chain_id().await.ok();
            print_connection_status(client.endpoint(), true, chain_id, Some(latest_block));
            Ok(ConnectionStatus { chain_id, latest_block })
        }
        Err(source) => {
            print_connection_status(client.endpoint(), false, None, None);
            Err(TrackerError::Connection {
                endpoint: client.endpoint().to_string(),
                source,
            })
        }
    }
}
