//! Per-element equivalence classes.
//!
//! Combines a gold [`Partition`] and a hypothesis [`Partition`] into, for each
//! element position, the pair of clusters that contain it. Clusters are shared
//! between their members through [`Arc`], so building the table costs one
//! allocation per cluster rather than per element.

use crate::error::{Error, Result};
use crate::partition::{Cluster, Partition};
use std::sync::Arc;

/// The gold and hypothesis equivalence classes of one element.
///
/// Both sets always contain the element's own position. The ids index
/// [`Partition::clusters`] of the partition each set came from, so two
/// elements with equal ids share the same `(gold, hyp)` cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalencePair {
    /// Positions in the same gold cluster.
    pub gold: Arc<Cluster>,
    /// Positions in the same hypothesis cluster.
    pub hyp: Arc<Cluster>,
    /// Index of the gold cluster.
    pub gold_id: usize,
    /// Index of the hypothesis cluster.
    pub hyp_id: usize,
}

/// Build the equivalence pair of every position.
///
/// The result is indexed by position.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if some position has a gold cluster but
/// no hypothesis cluster, or the reverse. That happens only when the two
/// partitions were built from sequences of different lengths.
pub fn build(gold: &Partition, hyp: &Partition) -> Result<Vec<EquivalencePair>> {
    let len = gold.len().max(hyp.len());
    let gold_slots = assign(gold, len);
    let hyp_slots = assign(hyp, len);

    gold_slots
        .into_iter()
        .zip(hyp_slots)
        .enumerate()
        .map(|(position, pair)| match pair {
            (Some((gold_id, gold)), Some((hyp_id, hyp))) => Ok(EquivalencePair {
                gold,
                hyp,
                gold_id,
                hyp_id,
            }),
            (None, _) => Err(Error::invalid_argument(format!(
                "position {} has no gold cluster",
                position
            ))),
            (_, None) => Err(Error::invalid_argument(format!(
                "position {} has no hypothesis cluster",
                position
            ))),
        })
        .collect()
}

/// Record, for every member position, the cluster it belongs to and its id.
fn assign(partition: &Partition, len: usize) -> Vec<Option<(usize, Arc<Cluster>)>> {
    let mut slots = vec![None; len];
    for (id, cluster) in partition.clusters().iter().enumerate() {
        let shared = Arc::new(cluster.clone());
        for &position in cluster {
            slots[position] = Some((id, Arc::clone(&shared)));
        }
    }
    slots
}
