//! Poll loop, cycle reporting and shutdown

pub mod shutdown;
pub mod reporter;
pub mod poll_loop;
pub mod startup;

pub use shutdown::*;
pub use reporter::*;
pub use poll_loop::*;
pub use startup::*;
