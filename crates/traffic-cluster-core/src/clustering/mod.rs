//! Correlation-driven k-means over activity patterns.
//!
//! # Overview
//!
//! This module partitions entities by how similar the *shape* of their
//! activity is, using temporal correlation (a similarity, higher is better)
//! in place of Euclidean distance.
//!
//! # Algorithm
//!
//! 1. Draw k distinct seed entities through an injected [`InitSampler`];
//!    their vectors become the initial centroids
//! 2. Assign each entity to the centroid with the highest temporal
//!    correlation (ties go to the lowest centroid index)
//! 3. Recompute each non-empty cluster's centroid as the elementwise mean
//!    of its members; an empty cluster keeps its previous centroid
//! 4. Repeat until the membership sets stop changing or the iteration
//!    budget runs out
//!
//! # Fail-Fast Validation
//!
//! - k must be >= 2 and <= the number of entities in the view
//! - every entity vector must have non-zero variance; a constant vector
//!   aborts the run before the first pass
//! - non-convergence within `max_iterations` is NOT an error; the final
//!   pass's partition is returned with `converged == false`

mod config;
mod correlation;
mod engine;
mod sampler;
#[cfg(test)]
mod tests;
mod types;

pub use config::ClusterConfig;
pub use correlation::temporal_correlation;
pub use engine::{CorrelationKMeans, PatternClustering};
pub use sampler::{InitSampler, RandomInit};
pub use types::{ClusteringResult, Partition};
