//! Reserve sampling and spot price derivation

use chrono::Utc;
use tracing::debug;
use crate::{
    errors::{TrackerError, TrackerResult},
    network::{ChainClient, IUniswapV2Pair, call_contract},
    types::{PairContext, PriceQuote, ReserveSnapshot},
    utils::{normalize_amount, spot_price},
};

/// Fetches the latest block and the pair's reserves, then derives both prices.
///
/// Any failure yields an error; no partial snapshot is returned.
pub async fn sample_reserves<C>(
    client: &C,
    pair: &PairContext,
) -> TrackerResult<(ReserveSnapshot, PriceQuote)>
where
    C: ChainClient,
{
    let block_number = client
        .latest_block_number()
        .await
        .map_err(|source| TrackerError::PollCycle {
            stage: "eth_blockNumber",
            source,
        })?;

    let reserves = call_contract(client, pair.pair_address, IUniswapV2Pair::getReservesCall {})
        .await
        .map_err(|e| TrackerError::PollCycle {
            stage: "getReserves",
            source: e.into(),
        })?;

    let snapshot = ReserveSnapshot {
        block_number,
        reserve0: reserves.reserve0.to::<u128>(),
        reserve1: reserves.reserve1.to::<u128>(),
        timestamp_last: reserves.blockTimestampLast,
        observed_at: Utc::now(),
    };
    debug!(
        "Sampled reserves at block {}: {} / {} (last update {:?})",
        snapshot.block_number,
        snapshot.reserve0,
        snapshot.reserve1,
        snapshot.last_update_time()
    );

    let quote = quote_reserves(pair, &snapshot);
    Ok((snapshot, quote))
}

/// Prices come from the raw reserves, not from the rounded amounts.
pub fn quote_reserves(pair: &PairContext, snapshot: &ReserveSnapshot) -> PriceQuote {
    let (r0, d0) = (snapshot.reserve0, pair.token0.decimals);
    let (r1, d1) = (snapshot.reserve1, pair.token1.decimals);

    PriceQuote {
        amount0: normalize_amount(r0, d0),
        amount1: normalize_amount(r1, d1),
        price0_in_1: spot_price(r0, d0, r1, d1),
        price1_in_0: spot_price(r1, d1, r0, d0),
    }
}
