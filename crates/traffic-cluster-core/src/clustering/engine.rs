//! Correlation k-means engine.

use std::collections::{BTreeMap, BTreeSet};

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::error::{ClusterError, ClusterResult};
use crate::pattern::{PatternStore, PatternView};

use super::config::ClusterConfig;
use super::correlation::{population_std, temporal_correlation};
use super::sampler::{InitSampler, RandomInit};
use super::types::{ClusteringResult, Partition};

/// Trait for partitioning a pattern view into k groups.
pub trait PatternClustering {
    /// Cluster the entities of a view.
    ///
    /// # Errors
    ///
    /// - [`ClusterError::InvalidK`] if k < 2 or k exceeds the view's
    ///   entity count
    /// - [`ClusterError::DegenerateVector`] if any entity vector (or a
    ///   centroid produced along the way) is constant
    fn cluster(
        &mut self,
        store: &PatternStore,
        view: PatternView,
        config: &ClusterConfig,
    ) -> ClusterResult<ClusteringResult>;
}

/// Lloyd's-style k-means that assigns by highest temporal correlation.
///
/// The initialization draw comes from an injected [`InitSampler`], so a
/// fixed seed (or a handwritten sampler) makes a run fully deterministic.
#[derive(Debug, Clone)]
pub struct CorrelationKMeans<S: InitSampler> {
    sampler: S,
}

impl CorrelationKMeans<RandomInit<ChaCha8Rng>> {
    /// Engine with a deterministic, seeded initialization draw.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomInit::seeded(seed))
    }
}

impl<S: InitSampler> CorrelationKMeans<S> {
    /// Engine with a caller-supplied initialization sampler.
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    /// Cluster an arbitrary id -> vector mapping.
    ///
    /// All vectors must share one length. This is the engine behind
    /// [`PatternClustering::cluster`]; it is public so callers can cluster
    /// data that does not come from a [`PatternStore`].
    pub fn cluster_vectors(
        &mut self,
        vectors: &BTreeMap<String, Vec<f64>>,
        config: &ClusterConfig,
    ) -> ClusterResult<ClusteringResult> {
        let n = vectors.len();
        let k = config.k;
        if k < 2 || k > n {
            return Err(ClusterError::InvalidK { k, entities: n });
        }
        if config.max_iterations == 0 {
            return Err(ClusterError::invalid_parameter(
                "max_iterations must be > 0",
            ));
        }

        // A constant vector makes every correlation undefined; refuse the
        // whole run up front rather than failing mid-pass.
        for (id, vector) in vectors {
            if population_std(vector) == 0.0 {
                warn!(entity = %id, "constant activity pattern");
                return Err(ClusterError::DegenerateVector);
            }
        }

        let entities: Vec<(&String, &Vec<f64>)> = vectors.iter().collect();
        let seeds = self.sampler.sample(n, k);
        let mut centroids: Vec<Vec<f64>> = seeds.iter().map(|&i| entities[i].1.clone()).collect();

        debug!(k, entities = n, "initialized centroids from sampled entities");

        let mut prev: Option<Vec<BTreeSet<String>>> = None;
        let mut groups: Vec<BTreeSet<String>> = Vec::new();
        let mut iterations = 0;
        let mut converged = false;

        for pass in 1..=config.max_iterations {
            iterations = pass;

            let mut next: Vec<BTreeSet<String>> = vec![BTreeSet::new(); k];
            for (id, vector) in &entities {
                // first centroid index achieving the maximum wins
                let mut best = 0;
                let mut best_corr = f64::NEG_INFINITY;
                for (i, centroid) in centroids.iter().enumerate() {
                    let corr = temporal_correlation(vector, centroid)?;
                    if corr > best_corr {
                        best_corr = corr;
                        best = i;
                    }
                }
                next[best].insert((*id).clone());
            }

            if prev.as_ref() == Some(&next) {
                converged = true;
                groups = next;
                break;
            }

            update_centroids(vectors, &next, &mut centroids);
            groups = next.clone();
            prev = Some(next);
        }

        info!(
            k,
            iterations,
            converged,
            "clustering finished"
        );
        Ok(ClusteringResult::new(
            Partition::new(groups),
            iterations,
            converged,
        ))
    }
}

impl<S: InitSampler> PatternClustering for CorrelationKMeans<S> {
    fn cluster(
        &mut self,
        store: &PatternStore,
        view: PatternView,
        config: &ClusterConfig,
    ) -> ClusterResult<ClusteringResult> {
        debug!(view = %view, "clustering pattern view");
        self.cluster_vectors(store.vectors(view), config)
    }
}

/// Recompute each non-empty cluster's centroid as the elementwise mean of
/// its members. An empty cluster retains its previous centroid, so the
/// update never divides by zero.
pub(crate) fn update_centroids(
    vectors: &BTreeMap<String, Vec<f64>>,
    groups: &[BTreeSet<String>],
    centroids: &mut [Vec<f64>],
) {
    for (centroid, group) in centroids.iter_mut().zip(groups) {
        if group.is_empty() {
            continue;
        }
        let mut sums = vec![0.0; centroid.len()];
        for id in group {
            for (sum, value) in sums.iter_mut().zip(&vectors[id]) {
                *sum += value;
            }
        }
        let count = group.len() as f64;
        for sum in sums.iter_mut() {
            *sum /= count;
        }
        *centroid = sums;
    }
}
