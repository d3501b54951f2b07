//! Helpers for building synthetic clustering inputs.

use std::collections::BTreeMap;

use crate::clustering::InitSampler;

/// Sampler that always picks the first k entities in map order.
///
/// With `BTreeMap` iteration this means the lexicographically smallest
/// ids, which makes initial centroids fully predictable.
pub struct FirstK;

impl InitSampler for FirstK {
    fn sample(&mut self, _n: usize, k: usize) -> Vec<usize> {
        (0..k).collect()
    }
}

/// Build an id -> vector map from literal entries.
pub fn vector_map(entries: &[(&str, &[f64])]) -> BTreeMap<String, Vec<f64>> {
    entries
        .iter()
        .map(|(id, values)| (id.to_string(), values.to_vec()))
        .collect()
}

/// Four entities in two obvious shape groups: rising and falling ramps.
///
/// Ids are chosen so `FirstK` with k=2 seeds one centroid from each group
/// ("a" rising, "b" falling).
pub fn two_shape_map() -> BTreeMap<String, Vec<f64>> {
    vector_map(&[
        ("a", &[1.0, 2.0, 3.0]),
        ("b", &[9.0, 8.0, 7.0]),
        ("c", &[2.0, 4.0, 6.0]),
        ("d", &[8.0, 6.0, 4.0]),
    ])
}
