//! Conversion and artifact helpers shared by the model wrappers.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use smartcore::linalg::naive::dense_matrix::DenseMatrix;

use crate::error::PipelineError;

/// Build a dense matrix from feature rows. Rejects empty or ragged input
/// before it reaches the underlying library.
pub(crate) fn to_matrix(rows: &[Vec<f64>]) -> Result<DenseMatrix<f64>, PipelineError> {
    let n_cols = rows
        .first()
        .map(Vec::len)
        .ok_or_else(|| PipelineError::Train("empty feature matrix".to_string()))?;
    if n_cols == 0 {
        return Err(PipelineError::Train("no feature columns".to_string()));
    }
    if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
        return Err(PipelineError::Train(format!(
            "ragged feature rows: expected {} columns, found {}",
            n_cols,
            bad.len()
        )));
    }
    Ok(DenseMatrix::from_2d_vec(&rows.to_vec()))
}

/// Owned label vector in the shape the underlying library expects.
pub(crate) fn to_labels(y: &[f64]) -> Vec<f64> {
    y.to_vec()
}

/// `fit` precondition: one label per feature row.
pub(crate) fn check_aligned(n_rows: usize, n_labels: usize) -> Result<(), PipelineError> {
    if n_rows != n_labels {
        return Err(PipelineError::LengthMismatch {
            expected: n_rows,
            actual: n_labels,
        });
    }
    Ok(())
}

/// Serialize a trained model wrapper to a binary artifact.
pub(crate) fn save_artifact<M: Serialize>(model: &M, path: &Path) -> Result<(), PipelineError> {
    let file = File::create(path)
        .map_err(|e| PipelineError::Artifact(format!("cannot create '{}': {}", path.display(), e)))?;
    bincode::serialize_into(BufWriter::new(file), model)
        .map_err(|e| PipelineError::Artifact(format!("cannot serialize model: {}", e)))
}

/// Reconstruct a model wrapper from a binary artifact.
pub(crate) fn load_artifact<M: DeserializeOwned>(path: &Path) -> Result<M, PipelineError> {
    let file = File::open(path)
        .map_err(|e| PipelineError::Artifact(format!("cannot open '{}': {}", path.display(), e)))?;
    bincode::deserialize_from(BufReader::new(file))
        .map_err(|e| PipelineError::Artifact(format!("cannot deserialize model: {}", e)))
}
