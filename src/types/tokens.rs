//! Token metadata types

use alloy::primitives::Address;
use serde::Serialize;

/// Decimals assumed when a token's `decimals()` call fails.
pub const DEFAULT_DECIMALS: u8 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}
