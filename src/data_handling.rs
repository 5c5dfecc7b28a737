//! Feature/label extraction and train/test partitioning.
//!
//! A [`Dataset`] is the model-facing view of a [`Table`]: a dense numeric
//! feature matrix plus an index-aligned label vector. Target labels are
//! encoded as class codes (`0.0, 1.0, ...` in sorted label order) so the
//! same representation works for categorical and numeric targets, and the
//! original label text is kept for decoding predictions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::PipelineError;
use crate::table::{ColumnData, Table};

#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature rows, one `Vec<f64>` per sample.
    pub x: Vec<Vec<f64>>,
    /// Class codes, index-aligned with `x`.
    pub y: Vec<f64>,
    pub feature_names: Vec<String>,
    /// Original label text per class code.
    pub class_labels: Vec<String>,
}

/// The four co-indexed containers produced by [`train_test_split`].
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: Vec<Vec<f64>>,
    pub x_test: Vec<Vec<f64>>,
    pub y_train: Vec<f64>,
    pub y_test: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from a table by extracting `target_column` as labels
    /// and the remaining columns as features.
    ///
    /// Fails with [`PipelineError::MissingColumn`] if the target is absent,
    /// [`PipelineError::NonNumericFeature`] for categorical feature columns,
    /// and [`PipelineError::MissingValue`] if missing values remain (run
    /// [`crate::preprocessing::clean`] first).
    pub fn from_table(table: &Table, target_column: &str) -> Result<Self, PipelineError> {
        let target = table
            .column(target_column)
            .ok_or_else(|| PipelineError::MissingColumn(target_column.to_string()))?;

        let (y, class_labels) = encode_labels(&target.data, target_column)?;

        let n_rows = table.n_rows();
        let mut feature_names = Vec::new();
        let mut feature_columns: Vec<&[Option<f64>]> = Vec::new();
        for column in table.columns() {
            if column.name == target_column {
                continue;
            }
            match &column.data {
                ColumnData::Numeric(values) => {
                    feature_names.push(column.name.clone());
                    feature_columns.push(values);
                }
                ColumnData::Categorical(_) => {
                    return Err(PipelineError::NonNumericFeature(column.name.clone()));
                }
            }
        }

        let mut x = Vec::with_capacity(n_rows);
        for row in 0..n_rows {
            let mut features = Vec::with_capacity(feature_columns.len());
            for (col_idx, values) in feature_columns.iter().enumerate() {
                match values[row] {
                    Some(v) => features.push(v),
                    None => {
                        return Err(PipelineError::MissingValue {
                            column: feature_names[col_idx].clone(),
                            row,
                        })
                    }
                }
            }
            x.push(features);
        }

        Ok(Dataset {
            x,
            y,
            feature_names,
            class_labels,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.x.len()
    }

    /// Map a predicted class code back to the original label text.
    pub fn decode_label(&self, code: f64) -> Option<&str> {
        self.class_labels
            .get(code.round() as usize)
            .map(String::as_str)
    }
}

/// Encode a target column as class codes. Distinct labels are sorted and the
/// code is the sorted index, so the encoding is stable across runs.
fn encode_labels(
    data: &ColumnData,
    column_name: &str,
) -> Result<(Vec<f64>, Vec<String>), PipelineError> {
    let missing = |row: usize| PipelineError::MissingValue {
        column: column_name.to_string(),
        row,
    };

    match data {
        ColumnData::Categorical(values) => {
            let texts: Vec<String> = values
                .iter()
                .enumerate()
                .map(|(row, v)| v.clone().ok_or_else(|| missing(row)))
                .collect::<Result<_, _>>()?;

            let mut class_labels = texts.clone();
            class_labels.sort();
            class_labels.dedup();

            let y = texts
                .iter()
                .map(|t| {
                    class_labels
                        .iter()
                        .position(|c| c == t)
                        .expect("label must be present in its own class set")
                        as f64
                })
                .collect();
            Ok((y, class_labels))
        }
        ColumnData::Numeric(values) => {
            let numbers: Vec<f64> = values
                .iter()
                .enumerate()
                .map(|(row, v)| v.ok_or_else(|| missing(row)))
                .collect::<Result<_, _>>()?;

            // Sort numerically, not by the formatted text (10 comes after 2).
            let mut classes = numbers.clone();
            classes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            classes.dedup();

            let y = numbers
                .iter()
                .map(|n| {
                    classes
                        .iter()
                        .position(|c| c.to_bits() == n.to_bits())
                        .expect("label must be present in its own class set")
                        as f64
                })
                .collect();
            let class_labels = classes.into_iter().map(format_label).collect();
            Ok((y, class_labels))
        }
    }
}

fn format_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Deterministically shuffle and partition a dataset.
///
/// `ceil(n * test_fraction)` samples go to the test partition, the rest to
/// training. The same `seed` always reproduces the identical partition, and
/// no sample appears in both.
pub fn train_test_split(
    dataset: &Dataset,
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit, PipelineError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(PipelineError::InvalidTestFraction(test_fraction));
    }

    let n = dataset.n_samples();
    let n_test = (n as f64 * test_fraction).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(PipelineError::InvalidTestFraction(test_fraction));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);

    let take = |idx: &[usize]| -> (Vec<Vec<f64>>, Vec<f64>) {
        (
            idx.iter().map(|&i| dataset.x[i].clone()).collect(),
            idx.iter().map(|&i| dataset.y[i]).collect(),
        )
    };
    let (x_test, y_test) = take(test_idx);
    let (x_train, y_train) = take(train_idx);

    log::debug!(
        "split: {} samples into {} train / {} test (fraction {}, seed {})",
        n,
        x_train.len(),
        x_test.len(),
        test_fraction,
        seed
    );

    Ok(TrainTestSplit {
        x_train,
        x_test,
        y_train,
        y_test,
    })
}
