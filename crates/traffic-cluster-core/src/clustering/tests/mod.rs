//! Tests for correlation k-means.
//!
//! # Test Organization
//!
//! - `helpers` - deterministic samplers and synthetic vector maps
//! - `config_tests` - ClusterConfig validation
//! - `engine_tests` - main CorrelationKMeans behavior
//! - `edge_cases` - degenerate inputs and boundary conditions

mod helpers;

mod config_tests;
