//! Pair Reserve Tracker - polls a Uniswap V2 style pair over JSON-RPC
//!
//! Resolves the pair's tokens and metadata once, then samples reserves on a
//! fixed interval and reports normalized amounts and spot prices in both
//! directions until shut down.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod pools;
pub mod monitor;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::{TrackerError, TrackerResult};
pub use types::*;
