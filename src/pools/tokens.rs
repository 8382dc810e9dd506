//! Token metadata resolution with fallback defaults

use alloy::primitives::Address;
use tracing::{debug, warn};
use crate::{
    errors::{TrackerError, TrackerResult},
    network::{ChainClient, IERC20Metadata, call_contract},
    types::{DEFAULT_DECIMALS, TokenInfo},
};

/// Resolves `symbol()` and `decimals()` for a token. Never fails.
///
/// Tokens with nonstandard or reverting metadata fall back to their address
/// as the symbol and to 18 decimals, so a misbehaving token cannot stop the
/// tracker from starting.
pub async fn resolve_token_info<C>(client: &C, address: Address) -> TokenInfo
where
    C: ChainClient,
{
    let symbol = match fetch_symbol(client, address).await {
        Ok(symbol) => symbol,
        Err(e) => {
            warn!("⚠️ {}; using address as symbol", e.describe());
            address.to_checksum(None)
        }
    };

    let decimals = match fetch_decimals(client, address).await {
        Ok(decimals) => decimals,
        Err(e) => {
            warn!("⚠️ {}; assuming {} decimals", e.describe(), DEFAULT_DECIMALS);
            DEFAULT_DECIMALS
        }
    };

    debug!("Resolved token {} as {} ({} decimals)", address, symbol, decimals);
    TokenInfo {
        address,
        symbol,
        decimals,
    }
}

async fn fetch_symbol<C>(client: &C, address: Address) -> TrackerResult<String>
where
    C: ChainClient,
{
    call_contract(client, address, IERC20Metadata::symbolCall {})
        .await
        .map(|ret| ret._0)
        .map_err(|e| metadata_error(address, "symbol", e))
}

async fn fetch_decimals<C>(client: &C, address: Address) -> TrackerResult<u8>
where
    C: ChainClient,
{
    call_contract(client, address, IERC20Metadata::decimalsCall {})
        .await
        .map(|ret| ret._0)
        .map_err(|e| metadata_error(address, "decimals", e))
}

fn metadata_error(token: Address, field: &'static str, cause: TrackerError) -> TrackerError {
    TrackerError::Metadata {
        token,
        field,
        source: cause.into(),
    }
}
