mod distribution;

pub use distribution::{PoolDistribution, generate_buckets, generate_pool_buckets};
