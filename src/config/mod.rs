//! Configuration module for the pool distribution viewer.

// Can all be private now because we have a public re-export.
mod debug;
mod persistence;
mod pool;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use pool::{POOL, PairLabels, PoolSpec};
