//! Classification metrics: accuracy and weighted precision/recall/F1.
//!
//! Precision, recall and F1 are computed one-vs-rest per class and averaged
//! with weights equal to each class's support in the ground truth. A class
//! whose score has a zero denominator contributes 0 to the average.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Compare predicted labels against ground truth.
///
/// Fails with [`PipelineError::LengthMismatch`] when the sequences are not
/// index-aligned.
pub fn evaluate(y_true: &[f64], y_pred: &[f64]) -> Result<Metrics, PipelineError> {
    if y_true.len() != y_pred.len() {
        return Err(PipelineError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(PipelineError::LengthMismatch {
            expected: 1,
            actual: 0,
        });
    }

    let n = y_true.len() as f64;
    let matches = y_true
        .iter()
        .zip(y_pred)
        .filter(|(t, p)| t.to_bits() == p.to_bits())
        .count();
    let accuracy = matches as f64 / n;

    // Per-class counts, keyed by label bit pattern so f64 labels can be
    // grouped exactly. BTreeMap keeps the class order deterministic.
    #[derive(Default)]
    struct Counts {
        tp: usize,
        fp: usize,
        fn_: usize,
        support: usize,
    }
    let mut per_class: BTreeMap<u64, Counts> = BTreeMap::new();
    for (&t, &p) in y_true.iter().zip(y_pred) {
        per_class.entry(t.to_bits()).or_default().support += 1;
        if t.to_bits() == p.to_bits() {
            per_class.entry(t.to_bits()).or_default().tp += 1;
        } else {
            per_class.entry(t.to_bits()).or_default().fn_ += 1;
            per_class.entry(p.to_bits()).or_default().fp += 1;
        }
    }

    let mut precision = 0.0;
    let mut recall = 0.0;
    let mut f1_score = 0.0;
    for counts in per_class.values() {
        if counts.support == 0 {
            // Predicted-only class: zero support, zero weight.
            continue;
        }
        let weight = counts.support as f64 / n;
        let p_denom = counts.tp + counts.fp;
        let r_denom = counts.tp + counts.fn_;
        let p = if p_denom > 0 {
            counts.tp as f64 / p_denom as f64
        } else {
            0.0
        };
        let r = if r_denom > 0 {
            counts.tp as f64 / r_denom as f64
        } else {
            0.0
        };
        let f1 = if p + r > 0.0 { 2.0 * p * r / (p + r) } else { 0.0 };
        precision += weight * p;
        recall += weight * r;
        f1_score += weight * f1;
    }

    Ok(Metrics {
        accuracy,
        precision,
        recall,
        f1_score,
    })
}

/// Render metrics in the fixed report format: a header line followed by one
/// `<Name>: <value to 4 decimals>` line per metric.
pub fn render(metrics: &Metrics) -> String {
    format!(
        "Evaluation Metrics:\n\
         Accuracy: {:.4}\n\
         Precision: {:.4}\n\
         Recall: {:.4}\n\
         F1_score: {:.4}",
        metrics.accuracy, metrics.precision, metrics.recall, metrics.f1_score
    )
}

/// Print the rendered report to standard output.
pub fn print_metrics(metrics: &Metrics) {
    println!("{}", render(metrics));
}
