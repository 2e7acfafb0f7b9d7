use crate::domain::DistributionError;

/// A price interval `[start, end)` split into `n_buckets` equal-width buckets.
/// Construction validates the inputs, so every live `PriceRange` has a positive step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    start: f64,
    end: f64,
    n_buckets: usize,
}

impl PriceRange {
    pub fn new(start: f64, end: f64, n_buckets: usize) -> Result<Self, DistributionError> {
        for value in [start, end] {
            if !value.is_finite() {
                return Err(DistributionError::NonFinitePrice(value));
            }
        }
        if n_buckets == 0 {
            return Err(DistributionError::InvalidCount);
        }
        if start >= end || !(end - start).is_finite() {
            return Err(DistributionError::InvalidRange { start, end });
        }
        let range = Self {
            start,
            end,
            n_buckets,
        };
        if !range.has_distinct_prices() {
            return Err(DistributionError::InvalidRange { start, end });
        }
        Ok(range)
    }

    // Every bucket edge must be a distinct f64 strictly inside `[start, end)`.
    fn has_distinct_prices(&self) -> bool {
        let mut prev = self.price_at(0);
        for idx in 1..self.n_buckets {
            let price = self.price_at(idx);
            if price <= prev {
                return false;
            }
            prev = price;
        }
        prev < self.end
    }

    pub fn n_buckets(&self) -> usize {
        self.n_buckets
    }

    /// Width of a single bucket.
    pub fn step(&self) -> f64 {
        (self.end - self.start) / self.n_buckets as f64
    }

    /// Left edge of bucket `idx`.
    pub fn price_at(&self, idx: usize) -> f64 {
        self.start + self.step() * idx as f64
    }

    /// Index of the bucket whose interval contains `price`, if any.
    pub fn bucket_index(&self, price: f64) -> Option<usize> {
        if !price.is_finite() || price < self.start || price >= self.end {
            return None;
        }
        let index = ((price - self.start) / self.step()).floor() as usize;
        Some(index.min(self.n_buckets - 1))
    }

    /// Smallest index whose left edge is at or above `active_price`.
    /// Returns `n_buckets` when every bucket sits below the threshold.
    pub fn transition_index(&self, active_price: f64) -> usize {
        let raw = ((active_price - self.start) / self.step()).ceil();
        let mut idx = if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.n_buckets)
        };

        // The closed form can land one off when `active_price` sits on a bucket edge.
        while idx > 0 && self.price_at(idx - 1) >= active_price {
            idx -= 1;
        }
        while idx < self.n_buckets && self.price_at(idx) < active_price {
            idx += 1;
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(PriceRange::new(1.0, 2.0, 0), Err(DistributionError::InvalidCount));
        assert_eq!(
            PriceRange::new(2.0, 2.0, 10),
            Err(DistributionError::InvalidRange { start: 2.0, end: 2.0 })
        );
        assert_eq!(
            PriceRange::new(3.0, 2.0, 10),
            Err(DistributionError::InvalidRange { start: 3.0, end: 2.0 })
        );
        assert!(matches!(
            PriceRange::new(f64::NAN, 2.0, 10),
            Err(DistributionError::NonFinitePrice(_))
        ));
        assert!(matches!(
            PriceRange::new(1.0, f64::INFINITY, 10),
            Err(DistributionError::NonFinitePrice(_))
        ));
    }

    #[test]
    fn rejects_ranges_without_distinct_prices() {
        // Span overflows to infinity.
        assert_eq!(
            PriceRange::new(-f64::MAX, f64::MAX, 4),
            Err(DistributionError::InvalidRange {
                start: -f64::MAX,
                end: f64::MAX
            })
        );
        // Step is below the f64 spacing near 1e16.
        assert!(matches!(
            PriceRange::new(1e16, 1e16 + 2.0, 4),
            Err(DistributionError::InvalidRange { .. })
        ));
        assert!(PriceRange::new(1e16, 1e16 + 8.0, 4).is_ok());
    }

    #[test]
    fn step_and_edges() {
        let range = PriceRange::new(10.0, 20.0, 4).unwrap();
        assert_eq!(range.step(), 2.5);
        assert_eq!(range.price_at(0), 10.0);
        assert_eq!(range.price_at(3), 17.5);
        assert_eq!(range.price_at(4), 20.0);
    }

    #[test]
    fn bucket_lookup() {
        let range = PriceRange::new(10.0, 20.0, 4).unwrap();
        assert_eq!(range.bucket_index(10.0), Some(0));
        assert_eq!(range.bucket_index(12.49), Some(0));
        assert_eq!(range.bucket_index(12.5), Some(1));
        assert_eq!(range.bucket_index(19.99), Some(3));
        assert_eq!(range.bucket_index(20.0), None);
        assert_eq!(range.bucket_index(9.99), None);
        assert_eq!(range.bucket_index(f64::NAN), None);
    }

    #[test]
    fn transition_index_bounds() {
        let range = PriceRange::new(10.0, 20.0, 4).unwrap();
        assert_eq!(range.transition_index(5.0), 0);
        assert_eq!(range.transition_index(10.0), 0);
        assert_eq!(range.transition_index(11.0), 1);
        // Exactly on an edge counts as at-or-after.
        assert_eq!(range.transition_index(12.5), 1);
        assert_eq!(range.transition_index(17.6), 4);
        assert_eq!(range.transition_index(25.0), 4);
    }
}
