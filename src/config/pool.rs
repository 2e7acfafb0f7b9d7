//! Pool distribution configuration (the mocked ETH/WBTC pool)

use std::ops::Range;

/// Display names for the two sides of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairLabels {
    /// Token held below the active price
    pub primary: &'static str,
    /// Token held at or above the active price
    pub secondary: &'static str,
    /// Unit of the active price, e.g. "ETH per WBTC"
    pub quote_unit: &'static str,
    /// Heading of the price line in the tooltip
    pub price_label: &'static str,
}

/// Everything needed to generate one distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolSpec {
    pub pair: PairLabels,
    pub start_price: f64,
    pub end_price: f64,
    /// Threshold separating primary from secondary buckets
    pub active_price: f64,
    pub bucket_count: usize,
    /// Magnitudes are drawn uniformly from this half-open band
    pub magnitude_band: Range<f64>,
}

impl PoolSpec {
    pub fn with_bucket_count(&self, bucket_count: usize) -> Self {
        Self {
            bucket_count,
            ..self.clone()
        }
    }
}

pub const POOL: PoolSpec = PoolSpec {
    pair: PairLabels {
        primary: "ETH",
        secondary: "WBTC",
        quote_unit: "ETH per WBTC",
        price_label: "Price (WBTC/ETH)",
    },
    start_price: 26.0906695108,
    end_price: 28.2631197883,
    active_price: 27.8424411281,
    bucket_count: 100,
    magnitude_band: 0.05..0.15,
};
