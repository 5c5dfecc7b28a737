use std::path::Path;

use serde::{Deserialize, Serialize};
use smartcore::linalg::naive::dense_matrix::DenseMatrix;
use smartcore::svm::svc::{SVCParameters, SVC};
use smartcore::svm::LinearKernel;

use crate::error::PipelineError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_aligned, load_artifact, save_artifact, to_labels, to_matrix};

/// Support vector classifier wrapper (linear kernel).
///
/// The underlying implementation is binary-only; training data with more
/// than two classes surfaces as a [`PipelineError::Train`].
#[derive(Serialize, Deserialize)]
pub struct SvmModel {
    c: f64,
    model: Option<SVC<f64, DenseMatrix<f64>, LinearKernel>>,
}

impl SvmModel {
    pub fn new(c: f64) -> Self {
        SvmModel { c, model: None }
    }

    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        load_artifact(path)
    }
}

impl ClassifierModel for SvmModel {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(), PipelineError> {
        check_aligned(x.len(), y.len())?;
        let matrix = to_matrix(x)?;
        let params = SVCParameters::default().with_c(self.c);
        let fitted = SVC::fit(&matrix, &to_labels(y), params)
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
        "svm"
    }
}
