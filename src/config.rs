//! Configuration for models and the training driver.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Supported classifier kinds and their hyper-parameters.
///
/// The tag is fixed at construction; everything downstream goes through the
/// uniform [`crate::models::ClassifierModel`] contract and never branches on
/// kind again.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    RandomForest {
        n_trees: u16,
        max_depth: Option<u16>,
    },
    LogisticRegression,
    Svm {
        c: f64,
    },
    DecisionTree {
        max_depth: Option<u16>,
    },
}

impl ModelType {
    /// The string tag used in configuration files and log output.
    pub fn tag(&self) -> &'static str {
        match self {
            ModelType::RandomForest { .. } => "random_forest",
            ModelType::LogisticRegression => "logistic_regression",
            ModelType::Svm { .. } => "svm",
            ModelType::DecisionTree { .. } => "decision_tree",
        }
    }
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::RandomForest {
            n_trees: 100,
            max_depth: None,
        }
    }
}

impl FromStr for ModelType {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random_forest" => Ok(ModelType::RandomForest {
                n_trees: 100,
                max_depth: None,
            }),
            "logistic_regression" => Ok(ModelType::LogisticRegression),
            "svm" => Ok(ModelType::Svm { c: 1.0 }),
            "decision_tree" => Ok(ModelType::DecisionTree { max_depth: None }),
            _ => Err(PipelineError::UnsupportedModel(s.to_string())),
        }
    }
}

/// Explicit configuration for one training run.
///
/// The defaults reproduce the canonical run: a comma-delimited input with a
/// `label` target column, an 80/20 split at seed 42, a 100-tree random
/// forest, and a fixed artifact path.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct TrainerConfig {
    pub input_path: PathBuf,
    pub target_column: String,
    pub test_fraction: f64,
    pub seed: u64,
    pub model: ModelType,
    pub artifact_path: PathBuf,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            input_path: PathBuf::from("data/raw/data.csv"),
            target_column: "label".to_string(),
            test_fraction: 0.2,
            seed: 42,
            model: ModelType::default(),
            artifact_path: PathBuf::from("models/random_forest_model.bin"),
        }
    }
}

impl TrainerConfig {
    /// Load a trainer configuration from a JSON file. Missing fields fall
    /// back to the defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}
