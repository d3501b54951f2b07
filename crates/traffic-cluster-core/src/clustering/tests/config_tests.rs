//! Tests for ClusterConfig validation.

use crate::clustering::ClusterConfig;
use crate::error::ClusterError;

#[test]
fn with_k_uses_default_budget() {
    let config = ClusterConfig::with_k(5).unwrap();
    assert_eq!(config.k, 5);
    assert_eq!(config.max_iterations, 100);
}

#[test]
fn zero_max_iterations_fails() {
    let err = ClusterConfig::new(3, 0).unwrap_err();
    assert!(matches!(err, ClusterError::InvalidParameter { .. }));
    assert!(err.to_string().contains("max_iterations"));
}

#[test]
fn default_config() {
    let config = ClusterConfig::default();
    assert_eq!(config.k, 2);
    assert_eq!(config.max_iterations, 100);
}
