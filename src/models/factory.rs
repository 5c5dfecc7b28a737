use std::path::Path;

use crate::config::ModelType;
use crate::error::PipelineError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::decision_tree::DecisionTreeModel;
use crate::models::logistic_regression::LogisticRegressionModel;
use crate::models::random_forest::RandomForestModel;
use crate::models::svm::SvmModel;

/// Build a boxed, untrained classifier from a [`ModelType`].
///
/// This is the single dispatch point over classifier kinds; everything after
/// construction goes through the uniform [`ClassifierModel`] contract.
pub fn build_model(model_type: &ModelType) -> Box<dyn ClassifierModel> {
    match model_type {
        ModelType::RandomForest { n_trees, max_depth } => {
            Box::new(RandomForestModel::new(*n_trees, *max_depth))
        }
        ModelType::LogisticRegression => Box::new(LogisticRegressionModel::new()),
        ModelType::Svm { c } => Box::new(SvmModel::new(*c)),
        ModelType::DecisionTree { max_depth } => Box::new(DecisionTreeModel::new(*max_depth)),
    }
}

/// Build a classifier from its string tag with default hyper-parameters.
/// Unknown tags fail with [`PipelineError::UnsupportedModel`].
pub fn build_model_from_tag(tag: &str) -> Result<Box<dyn ClassifierModel>, PipelineError> {
    let model_type: ModelType = tag.parse()?;
    Ok(build_model(&model_type))
}

/// Reconstruct a trained classifier of the given kind from a binary artifact.
pub fn load_model(
    model_type: &ModelType,
    path: &Path,
) -> Result<Box<dyn ClassifierModel>, PipelineError> {
    Ok(match model_type {
        ModelType::RandomForest { .. } => Box::new(RandomForestModel::load(path)?),
        ModelType::LogisticRegression => Box::new(LogisticRegressionModel::load(path)?),
        ModelType::Svm { .. } => Box::new(SvmModel::load(path)?),
        ModelType::DecisionTree { .. } => Box::new(DecisionTreeModel::load(path)?),
    })
}
