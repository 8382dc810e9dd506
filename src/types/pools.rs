//! Pair and reserve types

use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use crate::types::TokenInfo;

/// Resolved once at startup and shared read-only by every poll cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairContext {
    pub pair_address: Address,
    pub token0: TokenInfo,
    pub token1: TokenInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReserveSnapshot {
    pub block_number: u64,
    // uint112 on chain
    #[serde(serialize_with = "as_decimal_string")]
    pub reserve0: u128,
    #[serde(serialize_with = "as_decimal_string")]
    pub reserve1: u128,
    /// On-chain timestamp of the pair's last reserve update.
    pub timestamp_last: u32,
    pub observed_at: DateTime<Utc>,
}

impl ReserveSnapshot {
    pub fn last_update_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.timestamp_last), 0)
    }
}

// JSON consumers lose precision on integers past 2^53.
fn as_decimal_string<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
