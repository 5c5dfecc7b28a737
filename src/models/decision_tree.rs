use std::path::Path;

use serde::{Deserialize, Serialize};
use smartcore::tree::decision_tree_classifier::{
    DecisionTreeClassifier, DecisionTreeClassifierParameters,
};

use crate::error::PipelineError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_aligned, load_artifact, save_artifact, to_labels, to_matrix};

/// Single decision tree classifier wrapper.
#[derive(Serialize, Deserialize)]
pub struct DecisionTreeModel {
    max_depth: Option<u16>,
    model: Option<DecisionTreeClassifier<f64>>,
}

impl DecisionTreeModel {
    pub fn new(max_depth: Option<u16>) -> Self {
        DecisionTreeModel {
            max_depth,
            model: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        load_artifact(path)
    }
}

impl ClassifierModel for DecisionTreeModel {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(), PipelineError> {
        check_aligned(x.len(), y.len())?;
        let matrix = to_matrix(x)?;
        let params = DecisionTreeClassifierParameters {
            max_depth: self.max_depth,
            ..Default::default()
        };
        let fitted = DecisionTreeClassifier::fit(&matrix, &to_labels(y), params)
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
        "decision_tree"
    }
}
