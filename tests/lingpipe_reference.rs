//! Reference scores from the LingPipe `ClusterScore` documentation.
//!
//! LingPipe reports these values under its element-equal weighting scheme;
//! they are checked to four decimal places.

use bcubed::{b_cubed, ClusterScore, Error};

const GOLD: [u32; 12] = [0, 0, 0, 0, 0, 1, 1, 2, 2, 2, 2, 2];
const HYP: [&str; 12] = ["A", "A", "A", "A", "A", "B", "B", "A", "A", "A", "A", "A"];

fn assert_close(expected: f64, actual: f64, what: &str) {
    assert!(
        (expected - actual).abs() < 1e-4,
        "{} should be {:.4}, got {:.6}",
        what,
        expected,
        actual
    );
}

#[test]
fn precision() {
    let cs = ClusterScore::new(GOLD, HYP).unwrap();
    assert_close(0.5833, cs.precision(), "precision");
}

#[test]
fn recall() {
    let cs = ClusterScore::new(GOLD, HYP).unwrap();
    assert_close(1.0, cs.recall(), "recall");
}

#[test]
fn f1() {
    let cs = ClusterScore::new(GOLD, HYP).unwrap();
    assert_close(0.7368, cs.f1(), "F1");
}

#[test]
fn borrowed_labels() {
    // Scoring from borrowed slices gives the same answer as owned arrays.
    let gold: Vec<String> = GOLD.iter().map(|g| format!("gold-{}", g)).collect();
    let cs = ClusterScore::new(&gold, HYP.iter()).unwrap();
    assert_close(0.5833, cs.precision(), "precision");
    assert_close(1.0, cs.recall(), "recall");
}

#[test]
fn free_function_matches_scorer() {
    let scores = b_cubed(GOLD, HYP).unwrap();
    let cs = ClusterScore::new(GOLD, HYP).unwrap();
    assert_eq!(scores, cs.scores());
}

#[test]
fn truncated_hypothesis_is_rejected() {
    let err = ClusterScore::new(GOLD, &HYP[..11]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)), "got {:?}", err);
}

#[cfg(feature = "serde")]
#[test]
fn scores_serialize() {
    let scores = b_cubed(GOLD, HYP).unwrap();
    let json = serde_json::to_value(scores).unwrap();
    assert_close(0.5833, json["precision"].as_f64().unwrap(), "precision");
    assert_close(1.0, json["recall"].as_f64().unwrap(), "recall");
    assert_close(0.7368, json["f1"].as_f64().unwrap(), "F1");

    let cs = ClusterScore::new(GOLD, HYP).unwrap();
    let json = serde_json::to_string(&cs.element_counts()[0]).unwrap();
    assert_eq!(
        json,
        r#"{"true_positives":5,"false_positives":5,"false_negatives":0}"#
    );
}
