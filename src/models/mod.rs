pub mod classifier_trait;
pub mod decision_tree;
pub mod factory;
pub mod logistic_regression;
pub mod random_forest;
pub mod svm;
pub mod utils;

pub use classifier_trait::ClassifierModel;
pub use factory::{build_model, build_model_from_tag, load_model};
