//! Table cleaning and normalization.
//!
//! `clean` drops rows with missing values and exact-duplicate rows;
//! `normalize` standardizes numeric columns to zero mean / unit variance.
//! Both are pure: they return new tables and never mutate their input.
//! `preprocess` chains them in the order the training driver expects.

use crate::table::{Column, ColumnData, Table};

/// Per-column standardization parameters for the numeric columns of a table.
#[derive(Clone, Debug)]
pub struct Scaler {
    /// (column name, mean, std) per numeric column.
    pub stats: Vec<(String, f64, f64)>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    /// A zero-variance column therefore standardizes to all zeros.
    const MIN_STD: f64 = 1e-9;
}

/// Remove rows containing missing values, then exact-duplicate rows
/// (first occurrence kept). Every surviving row existed verbatim in the input.
pub fn clean(table: &Table) -> Table {
    let complete: Vec<usize> = (0..table.n_rows())
        .filter(|&row| !table.row_has_missing(row))
        .collect();
    let without_missing = table.select_rows(&complete);

    let unique = without_missing.first_occurrence_indices();
    let cleaned = without_missing.select_rows(&unique);

    log::debug!(
        "clean: {} rows in, {} dropped for missing values, {} dropped as duplicates",
        table.n_rows(),
        table.n_rows() - without_missing.n_rows(),
        without_missing.n_rows() - cleaned.n_rows()
    );
    cleaned
}

/// Fit a [`Scaler`] over the numeric columns of a table, computing each
/// column's mean and stddev over its non-missing values.
pub fn fit_scaler(table: &Table) -> Scaler {
    let mut stats = Vec::new();
    for column in table.columns() {
        if let ColumnData::Numeric(values) = &column.data {
            let present: Vec<f64> = values.iter().flatten().copied().collect();
            if present.is_empty() {
                stats.push((column.name.clone(), 0.0, Scaler::MIN_STD));
                continue;
            }
            let n = present.len() as f64;
            let mean = present.iter().sum::<f64>() / n;
            let var = present.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
            let std = var.sqrt();
            if std < Scaler::MIN_STD {
                log::warn!(
                    "column '{}' has zero variance; it will normalize to zeros",
                    column.name
                );
            }
            stats.push((column.name.clone(), mean, std.max(Scaler::MIN_STD)));
        }
    }
    Scaler { stats }
}

/// Apply a fitted [`Scaler`] to a table. Numeric columns named in the scaler
/// are standardized; categorical columns and missing cells pass through.
pub fn transform(table: &Table, scaler: &Scaler) -> Table {
    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let stats = scaler
                .stats
                .iter()
                .find(|(name, _, _)| *name == column.name);
            match (&column.data, stats) {
                (ColumnData::Numeric(values), Some((_, mean, std))) => Column {
                    name: column.name.clone(),
                    data: ColumnData::Numeric(
                        values.iter().map(|v| v.map(|x| (x - mean) / std)).collect(),
                    ),
                },
                _ => column.clone(),
            }
        })
        .collect();
    Table::new(columns)
}

/// Standardize every numeric column of a table to mean 0 / stddev 1.
pub fn normalize(table: &Table) -> Table {
    let scaler = fit_scaler(table);
    transform(table, &scaler)
}

/// The preprocessing step of the training driver: clean, then normalize.
pub fn preprocess(table: &Table) -> Table {
    normalize(&clean(table))
}
