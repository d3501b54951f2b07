//! Partition and clustering-result types.

use std::collections::BTreeSet;
use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::{ClusterError, ClusterResult};

/// An ordered sequence of disjoint entity groups.
///
/// Produced partitions cover every entity of the clustered view exactly
/// once. Groups are sets, so two partitions compare equal iff they hold
/// the same memberships in the same group order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    groups: Vec<BTreeSet<String>>,
}

impl Partition {
    /// Wrap a sequence of groups as a partition.
    pub fn new(groups: Vec<BTreeSet<String>>) -> Self {
        Self { groups }
    }

    /// Parse a reference partition: one group per line, tab-separated
    /// identifiers. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// - [`ClusterError::Parse`] if a line contains an empty identifier
    /// - [`ClusterError::Io`] if reading fails
    pub fn from_lines(reader: impl BufRead) -> ClusterResult<Self> {
        let mut groups = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches(&['\r', '\n'][..]);
            if line.trim().is_empty() {
                continue;
            }
            let mut group = BTreeSet::new();
            for id in line.split('\t') {
                let id = id.trim();
                if id.is_empty() {
                    return Err(ClusterError::parse(idx + 1, "empty identifier in group"));
                }
                group.insert(id.to_string());
            }
            groups.push(group);
        }
        Ok(Self { groups })
    }

    /// The groups, in index order.
    pub fn groups(&self) -> &[BTreeSet<String>] {
        &self.groups
    }

    /// Group at `index`, if present.
    pub fn group(&self, index: usize) -> Option<&BTreeSet<String>> {
        self.groups.get(index)
    }

    /// Number of groups, counting empty ones.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total entity count (sum of all group sizes).
    pub fn total_entities(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    /// Union of all group members.
    pub fn universe(&self) -> BTreeSet<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.iter().map(String::as_str))
            .collect()
    }

    /// True if the partition has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Outcome of a clustering run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// The produced partition, groups in centroid-index order.
    pub partition: Partition,

    /// Number of assignment passes executed.
    pub iterations: usize,

    /// Whether the memberships stabilized within the iteration budget.
    ///
    /// When false, `partition` is the final pass's assignment; this is a
    /// normal termination mode.
    pub converged: bool,
}

impl ClusteringResult {
    pub(crate) fn new(partition: Partition, iterations: usize, converged: bool) -> Self {
        Self {
            partition,
            iterations,
            converged,
        }
    }
}
