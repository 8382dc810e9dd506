//! Core data types and structures

pub mod tokens;
pub mod pools;
pub mod prices;

pub use tokens::*;
pub use pools::*;
pub use prices::*;
