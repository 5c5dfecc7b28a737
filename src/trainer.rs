//! Training driver: orchestrates the full load-to-artifact pipeline.
//!
//! The preprocessing step is clean-then-normalize, applied before the
//! train/test split. No failure is recovered from here; any error aborts
//! the run and propagates to the caller with context.

use anyhow::Context;

use crate::config::TrainerConfig;
use crate::data_handling::{train_test_split, Dataset};
use crate::io::read_csv;
use crate::models::factory::build_model;
use crate::preprocessing::preprocess;

/// Run one training pass: load, preprocess, split, fit, persist.
///
/// The side effect is the serialized model artifact at
/// `config.artifact_path`; the held-out accuracy is logged.
pub fn train(config: &TrainerConfig) -> anyhow::Result<()> {
    log::info!(
        "training a {} model from '{}'",
        config.model.tag(),
        config.input_path.display()
    );

    let table = read_csv(&config.input_path)
        .with_context(|| format!("Failed to load '{}'", config.input_path.display()))?;
    log::info!("loaded {} rows x {} columns", table.n_rows(), table.n_cols());

    let prepared = preprocess(&table);
    log::info!("{} rows after cleaning", prepared.n_rows());

    let dataset = Dataset::from_table(&prepared, &config.target_column)
        .context("Failed to extract features and labels")?;
    log::info!(
        "{} features, {} classes: {:?}",
        dataset.feature_names.len(),
        dataset.class_labels.len(),
        dataset.class_labels
    );

    let split = train_test_split(&dataset, config.test_fraction, config.seed)
        .context("Failed to split dataset")?;

    let mut model = build_model(&config.model);
    model
        .fit(&split.x_train, &split.y_train)
        .with_context(|| format!("Failed to fit {} model", model.name()))?;

    let holdout_accuracy = model
        .score(&split.x_test, &split.y_test)
        .context("Failed to score held-out partition")?;
    log::info!("held-out accuracy: {:.4}", holdout_accuracy);

    if let Some(parent) = config.artifact_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create artifact directory '{}'", parent.display())
            })?;
        }
    }
    model
        .save(&config.artifact_path)
        .with_context(|| format!("Failed to save model to '{}'", config.artifact_path.display()))?;
    log::info!("model saved to '{}'", config.artifact_path.display());

    Ok(())
}
