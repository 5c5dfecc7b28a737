use std::path::Path;

use serde::{Deserialize, Serialize};
use smartcore::linalg::naive::dense_matrix::DenseMatrix;
use smartcore::linear::logistic_regression::LogisticRegression;

use crate::error::PipelineError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_aligned, load_artifact, save_artifact, to_labels, to_matrix};

/// Logistic regression classifier wrapper.
#[derive(Serialize, Deserialize)]
pub struct LogisticRegressionModel {
    model: Option<LogisticRegression<f64, DenseMatrix<f64>>>,
}

impl LogisticRegressionModel {
    pub fn new() -> Self {
        LogisticRegressionModel { model: None }
    }

    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        load_artifact(path)
    }
}

impl Default for LogisticRegressionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierModel for LogisticRegressionModel {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(), PipelineError> {
        check_aligned(x.len(), y.len())?;
        let matrix = to_matrix(x)?;
        let fitted = LogisticRegression::fit(&matrix, &to_labels(y), Default::default())
            .map_err(|e| PipelineError::Train(e.to_string()))?;
        self.model = Some(fitted);
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>, PipelineError> {
        let model = self.model.as_ref().ok_or(PipelineError::NotFitted)?;
        let matrix = to_matrix(x)?;
        model
            .predict(&matrix)
            .map_err(|e| PipelineError::Train(format!("prediction failed: {}", e)))
    }

    fn save(&self, path: &Path) -> Result<(), PipelineError> {
        if self.model.is_none() {
            return Err(PipelineError::NotFitted);
        }
        save_artifact(self, path)
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
