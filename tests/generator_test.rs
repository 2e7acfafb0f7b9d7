//! Properties of the bucket generator, checked through the public API.

use pool_distribution::{
    Bucket, DistributionError, POOL, PoolDistribution, PriceRange, generate_buckets,
    generate_pool_buckets,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const START: f64 = 26.0906695108;
const END: f64 = 28.2631197883;
const ACTIVE: f64 = 27.8424411281;

fn reference_buckets(seed: u64) -> Vec<Bucket> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_pool_buckets(START, END, ACTIVE, 100, &mut rng).unwrap()
}

#[test]
fn length_matches_bucket_count() {
    let mut rng = StdRng::seed_from_u64(0);
    for count in [1, 2, 7, 100, 1000] {
        let buckets = generate_pool_buckets(START, END, ACTIVE, count, &mut rng).unwrap();
        assert_eq!(buckets.len(), count);
    }
}

#[test]
fn prices_are_evenly_spaced_and_increasing() {
    let buckets = reference_buckets(1);
    let step = (END - START) / 100.0;

    for (i, bucket) in buckets.iter().enumerate() {
        assert_eq!(bucket.price, START + step * i as f64);
    }
    for pair in buckets.windows(2) {
        assert!(pair[1].price > pair[0].price);
    }
}

#[test]
fn exactly_one_value_in_band() {
    for seed in 0..20 {
        for bucket in reference_buckets(seed) {
            let values: Vec<f64> = [bucket.primary_value(), bucket.secondary_value()]
                .into_iter()
                .flatten()
                .collect();
            assert_eq!(values.len(), 1, "bucket at {} must carry one value", bucket.price);
            assert!((0.05..0.15).contains(&values[0]), "{} out of band", values[0]);
        }
    }
}

#[test]
fn classification_follows_active_price() {
    for bucket in reference_buckets(2) {
        assert_eq!(bucket.primary_value().is_some(), bucket.price < ACTIVE);
        assert_eq!(bucket.secondary_value().is_some(), bucket.price >= ACTIVE);
    }
}

#[test]
fn active_price_outside_range_puts_everything_on_one_side() {
    let mut rng = StdRng::seed_from_u64(3);

    let at_start = generate_pool_buckets(START, END, START, 50, &mut rng).unwrap();
    assert!(at_start.iter().all(|b| b.secondary_value().is_some()));

    let below = generate_pool_buckets(START, END, START - 1.0, 50, &mut rng).unwrap();
    assert!(below.iter().all(|b| b.secondary_value().is_some()));

    let at_end = generate_pool_buckets(START, END, END, 50, &mut rng).unwrap();
    assert!(at_end.iter().all(|b| b.primary_value().is_some()));

    let above = generate_pool_buckets(START, END, END + 1.0, 50, &mut rng).unwrap();
    assert!(above.iter().all(|b| b.primary_value().is_some()));
}

#[test]
fn reference_scenario() {
    let buckets = reference_buckets(4);
    let step = (END - START) / 100.0;

    assert_eq!(buckets[0].price, START);
    assert!(buckets[0].primary_value().is_some());

    let last = &buckets[99];
    assert!((last.price - (START + 99.0 * step)).abs() < 1e-12);
    assert!((last.price - 28.2414).abs() < 1e-4);
    assert!(last.secondary_value().is_some());

    let expected = ((ACTIVE - START) / step).ceil() as usize;
    assert_eq!(expected, 81);
    let transition = buckets
        .iter()
        .position(|b| b.price >= ACTIVE)
        .unwrap();
    assert_eq!(transition, expected);
    assert!(buckets[80].primary_value().is_some());
    assert!(buckets[81].secondary_value().is_some());

    let range = PriceRange::new(START, END, 100).unwrap();
    assert_eq!(range.transition_index(ACTIVE), expected);
}

#[test]
fn prices_repeat_and_seeds_reproduce() {
    let a = reference_buckets(5);
    let b = reference_buckets(5);
    let c = reference_buckets(6);

    assert_eq!(a, b);
    let prices = |v: &[Bucket]| v.iter().map(|b| b.price).collect::<Vec<_>>();
    assert_eq!(prices(&a), prices(&c));
    assert_ne!(a, c);
}

#[test]
fn invalid_arguments_are_rejected() {
    let mut rng = StdRng::seed_from_u64(7);

    assert_eq!(
        generate_pool_buckets(START, END, ACTIVE, 0, &mut rng),
        Err(DistributionError::InvalidCount)
    );
    assert_eq!(
        generate_pool_buckets(END, START, ACTIVE, 100, &mut rng),
        Err(DistributionError::InvalidRange { start: END, end: START })
    );
    assert_eq!(
        generate_pool_buckets(START, START, ACTIVE, 100, &mut rng),
        Err(DistributionError::InvalidRange { start: START, end: START })
    );
    assert!(matches!(
        generate_pool_buckets(START, END, f64::NAN, 100, &mut rng),
        Err(DistributionError::NonFinitePrice(_))
    ));
    assert!(matches!(
        generate_pool_buckets(-f64::MAX, f64::MAX, 0.0, 4, &mut rng),
        Err(DistributionError::InvalidRange { .. })
    ));
    assert!(matches!(
        generate_pool_buckets(1e16, 1e16 + 2.0, 1e16 + 1.0, 4, &mut rng),
        Err(DistributionError::InvalidRange { .. })
    ));
}

#[test]
fn generate_buckets_accepts_any_rng() {
    let range = PriceRange::new(START, END, 10).unwrap();
    let mut thread_rng = rand::thread_rng();
    let buckets = generate_buckets(&range, ACTIVE, &mut thread_rng);
    assert_eq!(buckets.len(), 10);
}

#[test]
fn default_pool_distribution() {
    let mut rng = StdRng::seed_from_u64(8);
    let dist = PoolDistribution::generate(&POOL, &mut rng).unwrap();

    assert_eq!(dist.len(), 100);
    assert_eq!(dist.transition_index(), 81);
    assert_eq!(dist.primary_series().len(), 81);
    assert_eq!(dist.secondary_series().len(), 19);

    let rows = dist.rows();
    assert_eq!(rows[0].price, START);
    assert!(rows[0].secondary_value.is_none());
    assert!(rows[99].primary_value.is_none());
}
