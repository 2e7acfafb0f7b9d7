use std::ops::Range;

use rand::Rng;

use crate::config::{DF, PairLabels, POOL, PoolSpec};
use crate::domain::{Bucket, BucketRow, DistributionError, Magnitude, PriceRange, Series};

/// Generates `range.n_buckets()` evenly spaced buckets, tagging each magnitude by its
/// side of `active_price`. Magnitudes are drawn from the default pool band.
///
/// The branch decision depends only on the bucket price; `rng` only supplies magnitudes.
/// A NaN `active_price` compares false, so every bucket lands at-or-after.
pub fn generate_buckets<R: Rng + ?Sized>(
    range: &PriceRange,
    active_price: f64,
    rng: &mut R,
) -> Vec<Bucket> {
    sample_buckets(range, active_price, &POOL.magnitude_band, rng)
}

/// Validates the raw inputs, then generates. Nothing is drawn from `rng` on error.
pub fn generate_pool_buckets<R: Rng + ?Sized>(
    start_price: f64,
    end_price: f64,
    active_price: f64,
    bucket_count: usize,
    rng: &mut R,
) -> Result<Vec<Bucket>, DistributionError> {
    let range = PriceRange::new(start_price, end_price, bucket_count)?;
    check_active_price(active_price)?;
    Ok(generate_buckets(&range, active_price, rng))
}

fn sample_buckets<R: Rng + ?Sized>(
    range: &PriceRange,
    active_price: f64,
    band: &Range<f64>,
    rng: &mut R,
) -> Vec<Bucket> {
    (0..range.n_buckets())
        .map(|i| {
            let price = range.price_at(i);
            let value = rng.gen_range(band.clone());
            Bucket {
                price,
                magnitude: Magnitude::classify(price, active_price, value),
            }
        })
        .collect()
}

fn check_active_price(active_price: f64) -> Result<(), DistributionError> {
    if active_price.is_finite() {
        Ok(())
    } else {
        Err(DistributionError::NonFinitePrice(active_price))
    }
}

fn check_band(band: &Range<f64>) -> Result<(), DistributionError> {
    let valid = band.start.is_finite() && band.end.is_finite() && band.start < band.end;
    if valid {
        Ok(())
    } else {
        Err(DistributionError::InvalidMagnitudeBand {
            low: band.start,
            high: band.end,
        })
    }
}

/// A generated distribution plus the context it was generated from.
/// This is the value a view holds for its lifetime; a refresh swaps `buckets` wholesale.
#[derive(Debug, Clone)]
pub struct PoolDistribution {
    pub pair: PairLabels,
    pub range: PriceRange,
    pub active_price: f64,
    magnitude_band: Range<f64>,
    buckets: Vec<Bucket>,
}

impl PoolDistribution {
    pub fn generate<R: Rng + ?Sized>(
        spec: &PoolSpec,
        rng: &mut R,
    ) -> Result<Self, DistributionError> {
        let range = PriceRange::new(spec.start_price, spec.end_price, spec.bucket_count)?;
        check_active_price(spec.active_price)?;
        check_band(&spec.magnitude_band)?;

        let mut distribution = Self {
            pair: spec.pair,
            range,
            active_price: spec.active_price,
            magnitude_band: spec.magnitude_band.clone(),
            buckets: Vec::new(),
        };
        distribution.regenerate(rng);
        Ok(distribution)
    }

    /// Draws a fresh set of magnitudes. Prices and classification are unchanged.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let buckets = crate::trace_time!("Generate Buckets", 500, {
            sample_buckets(&self.range, self.active_price, &self.magnitude_band, rng)
        });
        self.buckets = buckets;

        if DF.log_generation {
            log::info!(
                "Generated {} buckets ({} {} / {} {}), transition at index {}",
                self.buckets.len(),
                self.series_len(Series::Primary),
                self.pair.primary,
                self.series_len(Series::Secondary),
                self.pair.secondary,
                self.transition_index()
            );
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Index of the first at-or-after bucket, or `len()` if there is none.
    pub fn transition_index(&self) -> usize {
        self.buckets
            .iter()
            .position(|b| b.series() == Series::Secondary)
            .unwrap_or(self.buckets.len())
    }

    /// `(price, value)` pairs for one side, ascending by price.
    pub fn series(&self, series: Series) -> Vec<(f64, f64)> {
        self.buckets
            .iter()
            .filter_map(|b| b.value_for(series).map(|v| (b.price, v)))
            .collect()
    }

    pub fn primary_series(&self) -> Vec<(f64, f64)> {
        self.series(Series::Primary)
    }

    pub fn secondary_series(&self) -> Vec<(f64, f64)> {
        self.series(Series::Secondary)
    }

    fn series_len(&self, series: Series) -> usize {
        self.buckets.iter().filter(|b| b.series() == series).count()
    }

    /// Bucket whose interval contains `price`.
    pub fn bucket_at_price(&self, price: f64) -> Option<&Bucket> {
        self.range
            .bucket_index(price)
            .and_then(|idx| self.buckets.get(idx))
    }

    /// Bucket whose bar (centred on its price, one step wide) covers `x`.
    pub fn bucket_near(&self, x: f64) -> Option<&Bucket> {
        self.bucket_at_price(x + self.range.step() / 2.0)
    }

    pub fn max_magnitude(&self) -> f64 {
        self.buckets
            .iter()
            .map(|b| b.magnitude.value())
            .fold(0.0, f64::max)
    }

    pub fn rows(&self) -> Vec<BucketRow> {
        self.buckets.iter().map(BucketRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_spec() -> PoolSpec {
        PoolSpec {
            start_price: 10.0,
            end_price: 20.0,
            active_price: 15.0,
            bucket_count: 10,
            ..POOL.clone()
        }
    }

    #[test]
    fn generate_splits_at_active_price() {
        let mut rng = StdRng::seed_from_u64(7);
        let dist = PoolDistribution::generate(&small_spec(), &mut rng).unwrap();

        assert_eq!(dist.len(), 10);
        assert_eq!(dist.transition_index(), 5);
        assert_eq!(dist.primary_series().len(), 5);
        assert_eq!(dist.secondary_series().len(), 5);
        // Bucket 5 sits exactly on the active price.
        assert_eq!(dist.buckets()[5].price, 15.0);
        assert!(dist.buckets()[5].secondary_value().is_some());
    }

    #[test]
    fn regenerate_keeps_prices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut dist = PoolDistribution::generate(&small_spec(), &mut rng).unwrap();
        let before = dist.buckets().to_vec();
        dist.regenerate(&mut rng);

        assert_eq!(before.len(), dist.len());
        for (old, new) in before.iter().zip(dist.buckets()) {
            assert_eq!(old.price, new.price);
            assert_eq!(old.series(), new.series());
        }
        assert_ne!(before, dist.buckets().to_vec());
    }

    #[test]
    fn rejects_bad_spec() {
        let mut rng = StdRng::seed_from_u64(1);
        let bad_active = PoolSpec {
            active_price: f64::NAN,
            ..small_spec()
        };
        assert!(matches!(
            PoolDistribution::generate(&bad_active, &mut rng),
            Err(DistributionError::NonFinitePrice(_))
        ));

        let bad_band = PoolSpec {
            magnitude_band: 0.2..0.1,
            ..small_spec()
        };
        assert_eq!(
            PoolDistribution::generate(&bad_band, &mut rng).unwrap_err(),
            DistributionError::InvalidMagnitudeBand { low: 0.2, high: 0.1 }
        );

        assert_eq!(
            PoolDistribution::generate(&small_spec().with_bucket_count(0), &mut rng).unwrap_err(),
            DistributionError::InvalidCount
        );
    }

    #[test]
    fn hover_lookup() {
        let mut rng = StdRng::seed_from_u64(3);
        let dist = PoolDistribution::generate(&small_spec(), &mut rng).unwrap();

        let bucket = dist.bucket_at_price(14.2).unwrap();
        assert_eq!(bucket.price, 14.0);
        assert!(bucket.primary_value().is_some());
        assert!(dist.bucket_at_price(20.5).is_none());

        // Bars are centred on the bucket price.
        assert_eq!(dist.bucket_near(13.6).unwrap().price, 14.0);
        assert_eq!(dist.bucket_near(14.4).unwrap().price, 14.0);
        assert_eq!(dist.bucket_near(9.6).unwrap().price, 10.0);
        assert!(dist.bucket_near(9.4).is_none());
    }

    #[test]
    fn max_magnitude_within_band() {
        let mut rng = StdRng::seed_from_u64(11);
        let dist = PoolDistribution::generate(&POOL, &mut rng).unwrap();
        let max = dist.max_magnitude();
        assert!((0.05..0.15).contains(&max));
    }
}
