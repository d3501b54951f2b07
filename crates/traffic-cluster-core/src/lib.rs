//! Traffic Cluster Core Library
//!
//! Clusters entities (restaurant locations) by the shape of their time-series
//! activity patterns and scores the resulting partition against a reference
//! partition.
//!
//! # Architecture
//!
//! This crate defines:
//! - [`PatternStore`] - named activity vectors for the daily, weekly, and
//!   combined views
//! - [`CorrelationKMeans`] - Lloyd's-style k-means that assigns by temporal
//!   correlation (a similarity, so highest wins) instead of distance
//! - [`purity`] / [`nmi`] - external-validation scores for a produced
//!   partition against a reference partition
//! - Error types and result aliases
//!
//! The store is populated once from tab-separated input and read-only
//! afterwards; each `cluster()` call is independent, so callers may run many
//! trials with independently seeded samplers.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use traffic_cluster_core::{
//!     purity, ClusterConfig, CorrelationKMeans,
//! };
//!
//! let mut vectors = BTreeMap::new();
//! vectors.insert("a".to_string(), vec![1.0, 2.0, 3.0]);
//! vectors.insert("b".to_string(), vec![1.0, 2.0, 3.0]);
//! vectors.insert("c".to_string(), vec![9.0, 8.0, 7.0]);
//! vectors.insert("d".to_string(), vec![9.0, 8.0, 7.0]);
//!
//! let mut engine = CorrelationKMeans::seeded(42);
//! let config = ClusterConfig::with_k(2).unwrap();
//! let result = engine.cluster_vectors(&vectors, &config).unwrap();
//!
//! assert_eq!(result.partition.total_entities(), 4);
//! // A partition scored against itself is perfectly pure.
//! assert_eq!(purity(&result.partition, &result.partition).unwrap(), 1.0);
//! ```

pub mod clustering;
pub mod error;
pub mod evaluation;
pub mod pattern;

// Re-exports for convenience
pub use clustering::{
    temporal_correlation, ClusterConfig, ClusteringResult, CorrelationKMeans, InitSampler,
    Partition, PatternClustering, RandomInit,
};
pub use error::{ClusterError, ClusterResult};
pub use evaluation::{nmi, purity};
pub use pattern::{PatternStore, PatternView, COMBINED_LEN, DAILY_LEN, WEEKLY_LEN};
