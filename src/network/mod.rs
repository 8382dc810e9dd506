//! Chain access: the client seam, the alloy provider and contract bindings

pub mod client;
pub mod contracts;
pub mod providers;

#[cfg(test)]
pub(crate) mod mock;

pub use client::*;
pub use contracts::*;
pub use providers::*;
