//! A fixed-capacity FIFO queue over signed integers.
//!
//! Enable the `tracing` feature to log queue construction, rejected
//! capacities and `clear`. Its test runs with `cargo test --features tracing`.

pub mod error;
mod indexer;
mod queue;
mod signed;

pub use self::indexer::{Indexer, Mask, Remainder};
pub use self::queue::{CircularQueue, MaskedQueue};
pub use self::signed::Signed;
