// Domain types and value objects
mod bucket;
mod error;
mod price_range;

// Re-export commonly used types to the world
pub use bucket::{Bucket, BucketRow, Magnitude, Series};
pub use error::DistributionError;
pub use price_range::PriceRange;
