//! Display and printing utilities

use serde::Serialize;
use tracing::info;
use crate::{
    errors::{TrackerError, TrackerResult},
    monitor::SessionStats,
    types::{PairContext, PriceQuote, ReserveSnapshot, TokenInfo},
};

pub fn format_snapshot_line(pair: &PairContext, snapshot: &ReserveSnapshot, quote: &PriceQuote) -> String {
    let sym0 = &pair.token0.symbol;
    let sym1 = &pair.token1.symbol;
    format!(
        "[block {}] reserves: {:.6} {} / {:.6} {} | 1 {} = {:.12} {} | 1 {} = {:.12} {}",
        snapshot.block_number,
        quote.amount0,
        sym0,
        quote.amount1,
        sym1,
        sym0,
        quote.price0_in_1,
        sym1,
        sym1,
        quote.price1_in_0,
        sym0,
    )
}

pub fn format_failure_line(error: &TrackerError) -> String {
    format!("Error fetching data: {}", error.describe())
}

#[derive(Serialize)]
struct SnapshotRecord<'a> {
    pair: &'a PairContext,
    #[serde(flatten)]
    snapshot: &'a ReserveSnapshot,
    #[serde(flatten)]
    quote: &'a PriceQuote,
}

pub fn format_snapshot_json(
    pair: &PairContext,
    snapshot: &ReserveSnapshot,
    quote: &PriceQuote,
) -> TrackerResult<String> {
    serde_json::to_string(&SnapshotRecord { pair, snapshot, quote }).map_err(|e| {
        TrackerError::PollCycle {
            stage: "snapshot serialization",
            source: e.into(),
        }
    })
}

pub fn format_token_line(label: &str, token: &TokenInfo) -> String {
    format!(
        "{}: {} ({}) dec={}",
        label,
        token.symbol,
        token.address.to_checksum(None),
        token.decimals
    )
}

pub fn print_connection_status(endpoint: &str, connected: bool, chain_id: Option<u64>, block: Option<u64>) {
    info!("🔗 RPC endpoint: {}", endpoint);
    info!("Connected: {}", connected);
    match chain_id {
        Some(id) => info!("Chain ID: {}", id),
        None => info!("Chain ID: unavailable"),
    }
    match block {
        Some(number) => info!("Latest block: {}", number),
        None => info!("Latest block: unavailable"),
    }
}

pub fn print_pair_context(pair: &PairContext) {
    info!("Tracking pair {}", pair.pair_address.to_checksum(None));
    info!("{}", format_token_line("token0", &pair.token0));
    info!("{}", format_token_line("token1", &pair.token1));
    info!("Press Ctrl+C to stop.\n");
}

pub fn print_final_statistics(stats: &SessionStats) {
    info!("\nStopping tracker.");
    info!("Final statistics:");
    info!("   Total runtime: {:?}", stats.uptime());
    info!("   Poll cycles: {}", stats.cycles);
    info!("   Successful: {}", stats.successes);
    info!("   Failed: {}", stats.failures);
}
