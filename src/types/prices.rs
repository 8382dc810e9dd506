//! Normalized amounts and spot prices

use serde::{Serialize, Serializer};
use std::fmt;

/// A spot price, or the unbounded sentinel used when the opposing reserve is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Finite(f64),
    Unbounded,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => fmt::Display::fmt(value, f),
            Self::Unbounded => f.write_str("inf"),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(value) => serializer.serialize_f64(*value),
            Self::Unbounded => serializer.serialize_str("inf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub amount0: f64,
    pub amount1: f64,
    /// Units of token1 per unit of token0.
    pub price0_in_1: Price,
    /// Units of token0 per unit of token1.
    pub price1_in_0: Price,
}
