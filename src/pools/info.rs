//! Pair resolution: token addresses and their metadata

use alloy::primitives::Address;
use tracing::debug;
use crate::{
    errors::{TrackerError, TrackerResult},
    network::{ChainClient, IUniswapV2Pair, call_contract},
    pools::resolve_token_info,
    types::PairContext,
};

/// Reads `token0()`/`token1()` and both tokens' metadata.
///
/// Either token address failing is fatal: the pair address is wrong or the
/// contract is not a pair. No partial context is ever returned.
pub async fn resolve_pair<C>(client: &C, pair_address: Address) -> TrackerResult<PairContext>
where
    C: ChainClient,
{
    debug!("Resolving pair at {}", pair_address);

    let token0 = call_contract(client, pair_address, IUniswapV2Pair::token0Call {})
        .await
        .map_err(|e| structural_error(pair_address, "token0", e))?
        ._0;
    let token1 = call_contract(client, pair_address, IUniswapV2Pair::token1Call {})
        .await
        .map_err(|e| structural_error(pair_address, "token1", e))?
        ._0;

    if token0 == token1 {
        return Err(TrackerError::StructuralResolution {
            pair: pair_address,
            field: "token1",
            source: anyhow::anyhow!("token0 and token1 are both {}", token0),
        });
    }

    let token0 = resolve_token_info(client, token0).await;
    let token1 = resolve_token_info(client, token1).await;

    Ok(PairContext {
        pair_address,
        token0,
        token1,
    })
}

fn structural_error(pair: Address, field: &'static str, cause: TrackerError) -> TrackerError {
    TrackerError::StructuralResolution {
        pair,
        field,
        source: cause.into(),
    }
}
