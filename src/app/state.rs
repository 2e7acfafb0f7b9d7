// src/app/state.rs

use crate::domain::DistributionError;
use crate::models::PoolDistribution;

/// What the view is currently holding.
#[derive(Debug, Default)]
pub(crate) enum AppState {
    /// Before the first generation (never visible once `App::new` returns).
    #[default]
    Unmounted,
    Ready(PoolDistribution),
    Failed(DistributionError),
}
