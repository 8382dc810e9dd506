//! Tracker configuration settings and environment variable handling

use alloy::primitives::Address;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use crate::errors::{TrackerError, TrackerResult};

// Configuration defaults
pub const DEFAULT_RPC_URL: &str = "https://eth.llamarpc.com";
pub const DEFAULT_PAIR_ADDRESS: &str = "0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc"; // Uniswap V2 USDC/WETH
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_DIR: &str = "output/logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(TrackerError::config(format!(
                "OUTPUT_FORMAT must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub pair_address: Address,
    pub poll_interval: Duration,
    pub rpc_timeout: Duration,
    /// Zero keeps polling forever without escalating.
    pub max_consecutive_failures: u32,
    pub output_format: OutputFormat,
    pub log_dir: String,
}

impl Config {
    pub fn load() -> TrackerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> TrackerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = lookup("RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        validate_rpc_url(&rpc_url)?;

        let pair_address = parse_pair_address(
            &lookup("PAIR_ADDRESS").unwrap_or_else(|| DEFAULT_PAIR_ADDRESS.to_string()),
        )?;

        let poll_interval_secs = parse_positive(
            "POLL_INTERVAL_SECS",
            lookup("POLL_INTERVAL_SECS"),
            DEFAULT_POLL_INTERVAL_SECS,
        )?;
        let rpc_timeout_secs = parse_positive(
            "RPC_TIMEOUT_SECS",
            lookup("RPC_TIMEOUT_SECS"),
            DEFAULT_RPC_TIMEOUT_SECS,
        )?;

        let max_consecutive_failures = match lookup("MAX_CONSECUTIVE_FAILURES") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                TrackerError::config(format!(
                    "MAX_CONSECUTIVE_FAILURES must be a non-negative integer, got '{}'",
                    raw
                ))
            })?,
            None => 0,
        };

        let output_format = match lookup("OUTPUT_FORMAT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::Text,
        };

        Ok(Self {
            rpc_url,
            pair_address,
            poll_interval: Duration::from_secs(poll_interval_secs),
            rpc_timeout: Duration::from_secs(rpc_timeout_secs),
            max_consecutive_failures,
            output_format,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        })
    }
}

fn validate_rpc_url(raw: &str) -> TrackerResult<()> {
    let url = reqwest::Url::parse(raw)
        .map_err(|e| TrackerError::config(format!("Invalid RPC_URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(TrackerError::config(format!(
            "RPC_URL must use http or https, got '{}'",
            scheme
        ))),
    }
}

/// Accepts raw lowercase/uppercase hex, or mixed case that carries a valid EIP-55 checksum.
pub fn parse_pair_address(raw: &str) -> TrackerResult<Address> {
    let raw = raw.trim();
    let hex = raw.strip_prefix("0x").ok_or_else(|| {
        TrackerError::config(format!("PAIR_ADDRESS must start with 0x: '{}'", raw))
    })?;

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TrackerError::config(format!(
            "PAIR_ADDRESS must be 20 bytes of hex: '{}'",
            raw
        )));
    }

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());

    if has_lower && has_upper {
        Address::parse_checksummed(raw, None).map_err(|e| {
            TrackerError::config(format!("PAIR_ADDRESS checksum mismatch '{}': {}", raw, e))
        })
    } else {
        Address::from_str(raw)
            .map_err(|e| TrackerError::config(format!("Invalid PAIR_ADDRESS '{}': {}", raw, e)))
    }
}

fn parse_positive(key: &str, value: Option<String>, default: u64) -> TrackerResult<u64> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TrackerError::config(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
    }
}
