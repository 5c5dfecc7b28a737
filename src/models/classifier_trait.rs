use std::path::Path;

use crate::error::PipelineError;
use crate::models::utils::to_labels;

/// The uniform contract shared by all classifier kinds.
///
/// Implementations wrap one underlying learning algorithm each; the kind is
/// chosen once in [`crate::models::factory`] and callers never branch on it
/// afterwards. A model starts untrained and transitions to trained via
/// `fit`; calling `fit` again silently retrains.
pub trait ClassifierModel {
    /// Train on feature rows `x` and index-aligned class codes `y`.
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(), PipelineError>;

    /// Predicted class codes, index-aligned with `x`.
    /// Fails with [`PipelineError::NotFitted`] before `fit`.
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>, PipelineError>;

    /// The underlying library's accuracy metric on held-out data.
    /// Same precondition as `predict`.
    fn score(&self, x: &[Vec<f64>], y: &[f64]) -> Result<f64, PipelineError> {
        let predictions = self.predict(x)?;
        if y.len() != predictions.len() {
            return Err(PipelineError::LengthMismatch {
                expected: y.len(),
                actual: predictions.len(),
            });
        }
        Ok(smartcore::metrics::accuracy(&to_labels(y), &predictions))
    }

    /// Serialize the trained model to a binary artifact at `path`.
    fn save(&self, path: &Path) -> Result<(), PipelineError>;

    /// Human readable name for log output.
    fn name(&self) -> &str {
        "classifier"
    }
}
