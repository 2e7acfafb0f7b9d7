use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Which side of the active price a bucket falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Series {
    /// Below the active price (the ETH side of the pool).
    Primary,
    /// At or above the active price (the WBTC side of the pool).
    Secondary,
}

/// Magnitude of a bucket, tagged by its side of the threshold.
/// Exactly one side is ever populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Magnitude {
    BeforeThreshold(f64),
    AtOrAfterThreshold(f64),
}

impl Magnitude {
    /// Tags `value` according to where `price` sits relative to `active_price`.
    pub fn classify(price: f64, active_price: f64, value: f64) -> Self {
        if price < active_price {
            Magnitude::BeforeThreshold(value)
        } else {
            Magnitude::AtOrAfterThreshold(value)
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Magnitude::BeforeThreshold(v) | Magnitude::AtOrAfterThreshold(v) => v,
        }
    }

    pub fn series(&self) -> Series {
        match self {
            Magnitude::BeforeThreshold(_) => Series::Primary,
            Magnitude::AtOrAfterThreshold(_) => Series::Secondary,
        }
    }
}

/// One sampled price interval. `price` is the left edge of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub price: f64,
    pub magnitude: Magnitude,
}

impl Bucket {
    pub fn primary_value(&self) -> Option<f64> {
        match self.magnitude {
            Magnitude::BeforeThreshold(v) => Some(v),
            Magnitude::AtOrAfterThreshold(_) => None,
        }
    }

    pub fn secondary_value(&self) -> Option<f64> {
        match self.magnitude {
            Magnitude::AtOrAfterThreshold(v) => Some(v),
            Magnitude::BeforeThreshold(_) => None,
        }
    }

    /// Series selector handed to the chart: the value for `series`, if this bucket belongs to it.
    pub fn value_for(&self, series: Series) -> Option<f64> {
        match series {
            Series::Primary => self.primary_value(),
            Series::Secondary => self.secondary_value(),
        }
    }

    pub fn series(&self) -> Series {
        self.magnitude.series()
    }
}

/// Flat, export-friendly view of a bucket with the absent side as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRow {
    pub price: f64,
    pub primary_value: Option<f64>,
    pub secondary_value: Option<f64>,
}

impl From<&Bucket> for BucketRow {
    fn from(bucket: &Bucket) -> Self {
        Self {
            price: bucket.price,
            primary_value: bucket.primary_value(),
            secondary_value: bucket.secondary_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_strict_below() {
        assert_eq!(Magnitude::classify(1.0, 2.0, 0.1), Magnitude::BeforeThreshold(0.1));
        assert_eq!(Magnitude::classify(2.0, 2.0, 0.1), Magnitude::AtOrAfterThreshold(0.1));
        assert_eq!(Magnitude::classify(3.0, 2.0, 0.1), Magnitude::AtOrAfterThreshold(0.1));
    }

    #[test]
    fn selectors_are_mutually_exclusive() {
        let before = Bucket { price: 1.0, magnitude: Magnitude::BeforeThreshold(0.07) };
        assert_eq!(before.primary_value(), Some(0.07));
        assert_eq!(before.secondary_value(), None);
        assert_eq!(before.value_for(Series::Primary), Some(0.07));
        assert_eq!(before.series(), Series::Primary);

        let after = Bucket { price: 3.0, magnitude: Magnitude::AtOrAfterThreshold(0.12) };
        assert_eq!(after.primary_value(), None);
        assert_eq!(after.value_for(Series::Secondary), Some(0.12));
        assert_eq!(after.magnitude.value(), 0.12);
    }

    #[test]
    fn row_serializes_with_nulls() {
        let bucket = Bucket { price: 1.5, magnitude: Magnitude::AtOrAfterThreshold(0.1) };
        let json = serde_json::to_value(BucketRow::from(&bucket)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "price": 1.5, "primaryValue": null, "secondaryValue": 0.1 })
        );
    }
}
