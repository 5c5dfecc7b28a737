use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Errors produced by the pipeline components.
///
/// Every component surfaces its failures through this enum; nothing is
/// recovered internally, callers decide what to do (the training driver
/// simply aborts the run).
#[derive(Debug)]
pub enum PipelineError {
    /// The input file is missing or unreadable.
    Io { path: PathBuf, source: std::io::Error },
    /// The input is not well-formed delimited text.
    Parse(String),
    /// A referenced column does not exist in the table.
    MissingColumn(String),
    /// A feature column is categorical where a numeric one is required.
    NonNumericFeature(String),
    /// A missing value survived into a stage that does not accept them.
    MissingValue { column: String, row: usize },
    /// The test fraction must satisfy 0 < f < 1 and leave both partitions non-empty.
    InvalidTestFraction(f64),
    /// The requested model tag is not one of the supported kinds.
    UnsupportedModel(String),
    /// `predict` or `score` was called before `fit`.
    NotFitted,
    /// Two label sequences that must be index-aligned have different lengths.
    LengthMismatch { expected: usize, actual: usize },
    /// The underlying learning library rejected the training data.
    Train(String),
    /// Writing or reading the serialized model artifact failed.
    Artifact(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            PipelineError::Parse(msg) => write!(f, "malformed delimited text: {}", msg),
            PipelineError::MissingColumn(name) => {
                write!(f, "column '{}' not found in table", name)
            }
            PipelineError::NonNumericFeature(name) => {
                write!(f, "feature column '{}' is not numeric", name)
            }
            PipelineError::MissingValue { column, row } => {
                write!(f, "missing value in column '{}' at row {}", column, row)
            }
            PipelineError::InvalidTestFraction(value) => {
                write!(f, "invalid test fraction {} (must be between 0 and 1)", value)
            }
            PipelineError::UnsupportedModel(tag) => {
                write!(
                    f,
                    "model type '{}' is not supported. Valid options are: \
                     random_forest, logistic_regression, svm, decision_tree",
                    tag
                )
            }
            PipelineError::NotFitted => {
                write!(f, "model has not been fitted; call fit before predict/score")
            }
            PipelineError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "label sequences must have equal length (expected {}, got {})",
                    expected, actual
                )
            }
            PipelineError::Train(msg) => write!(f, "training failed: {}", msg),
            PipelineError::Artifact(msg) => write!(f, "model artifact error: {}", msg),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
