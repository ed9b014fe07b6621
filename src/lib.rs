//! # bcubed
//!
//! B-cubed (B³) precision, recall, and F1 for scoring a clustering against a
//! gold standard.
//!
//! Elements are identified by their position in two parallel label
//! sequences: one gold, one hypothesized. For each element the scorer
//! compares the set of positions sharing its gold cluster with the set
//! sharing its hypothesis cluster, then averages per-element precision and
//! recall over all elements (element-equal weighting). Scores match LingPipe's
//! `ClusterScore`.
//!
//! ## Quick Start
//!
//! ```rust
//! use bcubed::ClusterScore;
//!
//! let gold = [0, 0, 1, 1];
//! let hyp = ["a", "a", "a", "b"];
//! let score = ClusterScore::new(gold, hyp)?;
//!
//! println!("{}", score.scores());
//! assert!(score.precision() > 0.0 && score.precision() <= 1.0);
//! # Ok::<(), bcubed::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Partition | [`partition`](mod@partition) | clusters of positions per labeling |
//! | Equivalence | [`equivalence`] | `(gold, hyp)` class per position |
//! | Aggregate | [`score`] | precision, recall, F1 |
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`BCubedScores`] and
//!   [`ElementCounts`].

#![warn(missing_docs)]

pub mod equivalence;
pub mod error;
pub mod partition;
pub mod score;

pub use equivalence::EquivalencePair;
pub use error::{Error, Result};
pub use partition::{partition, Cluster, Partition};
pub use score::{b_cubed, BCubedScores, ClusterScore, ElementCounts};
