//! Custom error types for the tracker

use alloy::primitives::Address;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("RPC connection failed: {endpoint}")]
    Connection {
        endpoint: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Token metadata call failed: {token} - {field}")]
    Metadata {
        token: Address,
        field: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Pair resolution failed: {pair} - {field}")]
    StructuralResolution {
        pair: Address,
        field: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("{stage} failed")]
    PollCycle {
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Contract call failed: {contract} - {function}")]
    Call {
        contract: Address,
        function: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to decode {function} result")]
    Decode {
        function: &'static str,
        #[source]
        source: alloy::sol_types::Error,
    },
}

impl TrackerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Renders the error with its full source chain on one line.
    pub fn describe(&self) -> String {
        let mut out = self.to_string();
        let mut source = StdError::source(self);
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
