//! Configuration management for the tracker

pub mod settings;

pub use settings::*;
