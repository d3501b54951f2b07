//! Configuration for correlation k-means.

use serde::{Deserialize, Serialize};

use crate::error::{ClusterError, ClusterResult};

/// Configuration for a clustering run.
///
/// The k range is validated against the selected view at cluster time,
/// since the entity count is not known here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Number of clusters (k). Must be >= 2 and at most the number of
    /// entities in the selected view.
    pub k: usize,

    /// Maximum refinement passes before stopping. Must be > 0.
    ///
    /// Exhausting the budget is a normal termination mode, not an error.
    pub max_iterations: usize,
}

impl ClusterConfig {
    /// Create a configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::InvalidParameter`] if `max_iterations` is 0.
    pub fn new(k: usize, max_iterations: usize) -> ClusterResult<Self> {
        if max_iterations == 0 {
            return Err(ClusterError::invalid_parameter(
                "max_iterations must be > 0",
            ));
        }
        Ok(Self { k, max_iterations })
    }

    /// Configuration for k clusters with the default iteration budget (100).
    pub fn with_k(k: usize) -> ClusterResult<Self> {
        Self::new(k, 100)
    }
}

impl Default for ClusterConfig {
    /// Default configuration: k=2, max_iterations=100.
    fn default() -> Self {
        Self {
            k: 2,
            max_iterations: 100,
        }
    }
}
