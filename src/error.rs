//! Error types.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while mutating a [`RectRegion`](crate::RectRegion).
#[derive(Debug, Error)]
pub enum RegionError {
    /// The rectangle store could not grow.
    #[error("failed to grow region storage to {requested} rectangles")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
