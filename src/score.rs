//! B-cubed precision, recall, and F1 with element-equal weighting.
//!
//! For each element we compare its gold equivalence class `G` with its
//! hypothesis equivalence class `H`:
//!
//! - true positives: `|G ∩ H|`
//! - false positives: `|H − G|`
//! - false negatives: `|G − H|`
//!
//! Per-element precision is `tp / (tp + fp) = |G ∩ H| / |H|` and per-element
//! recall is `tp / (tp + fn) = |G ∩ H| / |G|`. The aggregate scores are the
//! arithmetic mean over all elements, so each element counts the same no
//! matter how large its cluster is. This matches LingPipe's `ClusterScore`
//! under its element-equal weighting scheme.
//!
//! # References
//!
//! - B³: Bagga & Baldwin, 1998
//! - Amigó et al., 2009 (formal constraints for extrinsic clustering metrics)

use crate::equivalence::{self, EquivalencePair};
use crate::error::{Error, Result};
use crate::partition::partition;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

// =============================================================================
// Result Types
// =============================================================================

/// B-cubed scores (precision, recall, F1).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BCubedScores {
    /// Precision
    pub precision: f64,
    /// Recall
    pub recall: f64,
    /// F1 score
    pub f1: f64,
}

impl BCubedScores {
    /// Create scores, deriving F1 from precision and recall.
    ///
    /// F1 is `0.0` when both inputs are zero.
    #[must_use]
    pub fn new(precision: f64, recall: f64) -> Self {
        let f1 = harmonic_mean(precision, recall).unwrap_or(0.0);
        Self {
            precision,
            recall,
            f1,
        }
    }
}

impl fmt::Display for BCubedScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B³: P={:.1}%  R={:.1}%  F1={:.1}%",
            self.precision * 100.0,
            self.recall * 100.0,
            self.f1 * 100.0
        )
    }
}

/// True/false positive/negative counts for one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementCounts {
    /// Positions in both the gold and the hypothesis class.
    pub true_positives: usize,
    /// Positions in the hypothesis class only.
    pub false_positives: usize,
    /// Positions in the gold class only.
    pub false_negatives: usize,
}

impl ElementCounts {
    /// `tp / (tp + fp)`, or `0.0` if the denominator is zero.
    ///
    /// Counts produced by [`ClusterScore`] always have `tp >= 1`, so the
    /// zero branch is only reachable for hand-built values.
    #[must_use]
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// `tp / (tp + fn)`, or `0.0` if the denominator is zero (see
    /// [`ElementCounts::precision`]).
    #[must_use]
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }
}

// =============================================================================
// ClusterScore
// =============================================================================

/// B-cubed scorer comparing a hypothesis clustering against a gold clustering.
///
/// The two label sequences describe the same elements in the same order.
/// Label types may differ between gold and hypothesis; only the partitions
/// they induce matter. Everything is computed once at construction, after
/// which the scorer is immutable and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use bcubed::ClusterScore;
///
/// let gold = [0, 0, 0, 0, 0, 1, 1, 2, 2, 2, 2, 2];
/// let hyp = ["A", "A", "A", "A", "A", "B", "B", "A", "A", "A", "A", "A"];
/// let score = ClusterScore::new(gold, hyp)?;
///
/// assert!((score.precision() - 0.5833).abs() < 1e-4);
/// assert!((score.recall() - 1.0).abs() < 1e-4);
/// assert!((score.f1() - 0.7368).abs() < 1e-4);
/// # Ok::<(), bcubed::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClusterScore {
    equivalences: Vec<EquivalencePair>,
    counts: Vec<ElementCounts>,
    num_gold_clusters: usize,
    num_hyp_clusters: usize,
}

impl ClusterScore {
    /// Build equivalence classes for the gold and hypothesis labelings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either sequence is empty or the
    /// two sequences differ in length.
    pub fn new<G, H>(gold: G, hyp: H) -> Result<Self>
    where
        G: IntoIterator,
        G::Item: Eq + Hash,
        H: IntoIterator,
        H::Item: Eq + Hash,
    {
        let gold = partition(gold);
        let hyp = partition(hyp);

        if gold.is_empty() || hyp.is_empty() {
            return Err(Error::invalid_argument(format!(
                "label sequences must be non-empty (gold has {}, hypothesis has {})",
                gold.len(),
                hyp.len()
            )));
        }
        if gold.len() != hyp.len() {
            return Err(Error::invalid_argument(format!(
                "gold has {} labels, hypothesis has {}",
                gold.len(),
                hyp.len()
            )));
        }

        let equivalences = equivalence::build(&gold, &hyp)?;
        let counts = count_elements(&equivalences);

        log::debug!(
            "B³: {} elements, {} gold clusters, {} hypothesis clusters",
            equivalences.len(),
            gold.num_clusters(),
            hyp.num_clusters()
        );

        Ok(Self {
            equivalences,
            counts,
            num_gold_clusters: gold.num_clusters(),
            num_hyp_clusters: hyp.num_clusters(),
        })
    }

    /// Number of elements scored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equivalences.len()
    }

    /// Always false: construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equivalences.is_empty()
    }

    /// Number of distinct gold labels.
    #[must_use]
    pub fn num_gold_clusters(&self) -> usize {
        self.num_gold_clusters
    }

    /// Number of distinct hypothesis labels.
    #[must_use]
    pub fn num_hyp_clusters(&self) -> usize {
        self.num_hyp_clusters
    }

    /// Equivalence pairs, indexed by element position.
    #[must_use]
    pub fn equivalences(&self) -> &[EquivalencePair] {
        &self.equivalences
    }

    /// Per-element counts, indexed by element position.
    #[must_use]
    pub fn element_counts(&self) -> &[ElementCounts] {
        &self.counts
    }

    /// True positives of every element.
    #[must_use]
    pub fn true_positives(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.true_positives).collect()
    }

    /// False positives of every element.
    #[must_use]
    pub fn false_positives(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.false_positives).collect()
    }

    /// False negatives of every element.
    #[must_use]
    pub fn false_negatives(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.false_negatives).collect()
    }

    /// B-cubed precision: mean of `tp / (tp + fp)` over elements.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.mean(ElementCounts::precision)
    }

    /// B-cubed recall: mean of `tp / (tp + fn)` over elements.
    #[must_use]
    pub fn recall(&self) -> f64 {
        self.mean(ElementCounts::recall)
    }

    /// B-cubed F1, the harmonic mean of precision and recall.
    ///
    /// Returns `0.0` when precision and recall are both zero. Every element
    /// is a true positive for itself, so that cannot happen for a scorer
    /// built from valid input; use [`ClusterScore::try_f1`] to get an error
    /// instead.
    #[must_use]
    pub fn f1(&self) -> f64 {
        self.try_f1().unwrap_or(0.0)
    }

    /// B-cubed F1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Numeric`] when precision and recall are both zero.
    pub fn try_f1(&self) -> Result<f64> {
        let precision = self.precision();
        let recall = self.recall();
        harmonic_mean(precision, recall).ok_or_else(|| {
            Error::numeric(format!(
                "F1 undefined: precision ({}) + recall ({}) is zero",
                precision, recall
            ))
        })
    }

    /// Precision, recall, and F1 together.
    #[must_use]
    pub fn scores(&self) -> BCubedScores {
        BCubedScores::new(self.precision(), self.recall())
    }

    /// Arithmetic mean of a per-element score.
    ///
    /// `0.0` for no elements, which [`ClusterScore::new`] never produces.
    fn mean(&self, per_element: impl Fn(&ElementCounts) -> f64) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.counts.iter().map(per_element).sum();
        sum / self.counts.len() as f64
    }
}

/// Score a hypothesis labeling against a gold labeling.
///
/// # Errors
///
/// See [`ClusterScore::new`].
pub fn b_cubed<G, H>(gold: G, hyp: H) -> Result<BCubedScores>
where
    G: IntoIterator,
    G::Item: Eq + Hash,
    H: IntoIterator,
    H::Item: Eq + Hash,
{
    Ok(ClusterScore::new(gold, hyp)?.scores())
}

/// Per-element counts for every equivalence pair.
///
/// Elements in the same `(gold, hyp)` cell share the same intersection, so
/// the cell sizes give every true positive count in one pass over the pairs.
fn count_elements(pairs: &[EquivalencePair]) -> Vec<ElementCounts> {
    let mut cells: HashMap<(usize, usize), usize> = HashMap::new();
    for pair in pairs {
        *cells.entry((pair.gold_id, pair.hyp_id)).or_insert(0) += 1;
    }

    pairs
        .iter()
        .map(|pair| {
            let true_positives = cells[&(pair.gold_id, pair.hyp_id)];
            ElementCounts {
                true_positives,
                false_positives: pair.hyp.len() - true_positives,
                false_negatives: pair.gold.len() - true_positives,
            }
        })
        .collect()
}

/// `numerator / denominator`, or `0.0` for a zero denominator.
///
/// Only [`ElementCounts`] built by hand can have a zero denominator.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn harmonic_mean(precision: f64, recall: f64) -> Option<f64> {
    let denominator = precision + recall;
    if denominator > 0.0 {
        Some(2.0 * precision * recall / denominator)
    } else {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
