//! Error types and failure escalation

pub mod tracker_error;
pub mod failure_tracker;

pub use tracker_error::*;
pub use failure_tracker::*;
