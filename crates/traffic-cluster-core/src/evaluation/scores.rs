//! Purity and Normalized Mutual Information.

use crate::clustering::Partition;
use crate::error::{ClusterError, ClusterResult};

/// Verify both partitions cover the same non-empty entity universe and
/// return the total entity count.
fn checked_universe_size(partition: &Partition, reference: &Partition) -> ClusterResult<usize> {
    let produced = partition.universe();
    let expected = reference.universe();
    if produced != expected {
        return Err(ClusterError::MismatchedUniverse {
            missing: expected.difference(&produced).count(),
            unexpected: produced.difference(&expected).count(),
        });
    }
    let total = partition.total_entities();
    if total == 0 {
        return Err(ClusterError::invalid_parameter(
            "cannot score an empty partition",
        ));
    }
    Ok(total)
}

/// Purity of a partition against a reference partition.
///
/// For each cluster, the reference group sharing the most members is
/// found; the overlap maxima are summed and divided by the total entity
/// count. Result in [0, 1], higher is better.
///
/// # Errors
///
/// [`ClusterError::MismatchedUniverse`] if the two partitions do not
/// cover the same entity set.
pub fn purity(partition: &Partition, reference: &Partition) -> ClusterResult<f64> {
    let total = checked_universe_size(partition, reference)?;

    let matched: usize = partition
        .groups()
        .iter()
        .map(|cluster| {
            reference
                .groups()
                .iter()
                .map(|group| cluster.intersection(group).count())
                .max()
                .unwrap_or(0)
        })
        .sum();

    Ok(matched as f64 / total as f64)
}

/// Normalized Mutual Information of a partition against a reference.
///
/// Mutual information over all (cluster, group) pairs with non-empty
/// intersection, normalized by the mean of the two partitions' entropies.
/// Natural log throughout. Result in [0, 1] for well-formed inputs.
///
/// # Errors
///
/// - [`ClusterError::MismatchedUniverse`] if the partitions cover
///   different entity sets
/// - [`ClusterError::ZeroEntropy`] in the degenerate case where both
///   partitions consist of a single group, so the denominator is zero
pub fn nmi(partition: &Partition, reference: &Partition) -> ClusterResult<f64> {
    let total = checked_universe_size(partition, reference)? as f64;

    let mut mutual_information = 0.0;
    for cluster in partition.groups() {
        for group in reference.groups() {
            let overlap = cluster.intersection(group).count();
            if overlap == 0 {
                continue;
            }
            let coef = overlap as f64 / total;
            mutual_information += coef
                * ((total * overlap as f64) / (cluster.len() as f64 * group.len() as f64)).ln();
        }
    }

    let h_partition = entropy(partition, total);
    let h_reference = entropy(reference, total);
    let denominator = (h_partition + h_reference) / 2.0;
    if denominator == 0.0 {
        return Err(ClusterError::ZeroEntropy);
    }

    Ok(mutual_information / denominator)
}

/// Shannon entropy of the group-size distribution, in nats.
fn entropy(partition: &Partition, total: f64) -> f64 {
    partition
        .groups()
        .iter()
        .filter(|group| !group.is_empty())
        .map(|group| {
            let coef = group.len() as f64 / total;
            -(coef * coef.ln())
        })
        .sum()
}
