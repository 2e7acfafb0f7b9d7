use std::error::Error;
use std::fmt;

/// Reasons a pool distribution cannot be generated.
/// All of these are raised before any bucket is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionError {
    /// `start` must lie strictly below `end`.
    InvalidRange { start: f64, end: f64 },
    /// At least one bucket is required.
    InvalidCount,
    /// A start, end or active price was NaN or infinite.
    NonFinitePrice(f64),
    /// The magnitude band must be a non-empty half-open interval.
    InvalidMagnitudeBand { low: f64, high: f64 },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DistributionError::InvalidRange { start, end } => {
                write!(
                    f,
                    "Invalid price range {}..{}: buckets need distinct, increasing prices",
                    start, end
                )
            }
            DistributionError::InvalidCount => write!(f, "Bucket count must be at least 1"),
            DistributionError::NonFinitePrice(value) => {
                write!(f, "Price must be a finite number, got {}", value)
            }
            DistributionError::InvalidMagnitudeBand { low, high } => {
                write!(f, "Invalid magnitude band: {}..{} is empty", low, high)
            }
        }
    }
}

impl Error for DistributionError {}
