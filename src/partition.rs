//! Grouping element positions by cluster label.
//!
//! Labels are compared for equality only; they never need an ordering. The
//! element itself is identified by its zero-based position in the label
//! sequence, so two clusterings with different label vocabularies (integers
//! for gold, strings for the hypothesis) partition the same positions.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// The set of element positions that share one cluster label.
pub type Cluster = BTreeSet<usize>;

/// A clustering of positions `0..len`, one [`Cluster`] per distinct label.
///
/// Every position belongs to exactly one cluster. Clusters are kept in order
/// of the first position that introduced their label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    clusters: Vec<Cluster>,
    len: usize,
}

impl Partition {
    /// The clusters, in order of first appearance.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Number of element positions covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no labels were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Group element positions by equal label value.
///
/// # Example
///
/// ```rust
/// use bcubed::partition;
///
/// let p = partition(["x", "y", "x"]);
/// assert_eq!(p.num_clusters(), 2);
/// assert_eq!(p.clusters()[0].iter().copied().collect::<Vec<_>>(), vec![0, 2]);
/// ```
#[must_use]
pub fn partition<L, I>(labels: I) -> Partition
where
    I: IntoIterator<Item = L>,
    L: Eq + Hash,
{
    let mut slots: HashMap<L, usize> = HashMap::new();
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut len = 0;

    for (position, label) in labels.into_iter().enumerate() {
        let slot = *slots.entry(label).or_insert_with(|| {
            clusters.push(Cluster::new());
            clusters.len() - 1
        });
        clusters[slot].insert(position);
        len = position + 1;
    }

    Partition { clusters, len }
}
