//! Pair resolution and reserve sampling

pub mod tokens;
pub mod info;
pub mod reserves;

pub use tokens::*;
pub use info::*;
pub use reserves::*;
