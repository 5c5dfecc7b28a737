//! End-to-end pipeline tests: CSV on disk through training to a reloadable
//! model artifact.

use std::io::Write;

use tabular_learn::config::{ModelType, TrainerConfig};
use tabular_learn::data_handling::{train_test_split, Dataset};
use tabular_learn::evaluation::evaluate;
use tabular_learn::io::read_csv;
use tabular_learn::models::factory::{build_model, load_model};
use tabular_learn::preprocessing::preprocess;
use tabular_learn::trainer;

/// Ten clean rows plus one duplicate and one row with a missing value.
const RAW_CSV: &str = "\
f1,f2,label
0.1,1.0,a
0.4,-1.0,b
0.6,1.0,a
0.9,-1.0,b
1.2,1.0,a
1.5,-1.0,b
1.8,1.0,a
2.1,-1.0,b
2.4,1.0,a
2.7,-1.0,b
0.1,1.0,a
3.0,,a
";

fn write_raw_csv(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("data.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(RAW_CSV.as_bytes()).unwrap();
    path
}

#[test]
fn load_preprocess_split_fit_predict() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = write_raw_csv(dir.path());

    let table = read_csv(&csv_path).unwrap();
    assert_eq!(table.n_rows(), 12);

    let prepared = preprocess(&table);
    assert_eq!(prepared.n_rows(), 10);

    let dataset = Dataset::from_table(&prepared, "label").unwrap();
    assert_eq!(dataset.feature_names, vec!["f1", "f2"]);
    assert_eq!(dataset.class_labels, vec!["a", "b"]);

    let split = train_test_split(&dataset, 0.2, 42).unwrap();
    assert_eq!(split.x_train.len(), 8);
    assert_eq!(split.x_test.len(), 2);

    let mut model = build_model(&ModelType::RandomForest {
        n_trees: 100,
        max_depth: None,
    });
    model.fit(&split.x_train, &split.y_train).unwrap();

    let predictions = model.predict(&split.x_test).unwrap();
    assert_eq!(predictions.len(), 2);

    // f2 perfectly separates the classes, so the forest should get these right
    let metrics = evaluate(&split.y_test, &predictions).unwrap();
    assert!(metrics.accuracy >= 0.5, "accuracy = {}", metrics.accuracy);
}

#[test]
fn trainer_produces_a_reloadable_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = write_raw_csv(dir.path());
    let artifact_path = dir.path().join("models").join("random_forest_model.bin");

    let config = TrainerConfig {
        input_path: csv_path,
        target_column: "label".to_string(),
        test_fraction: 0.2,
        seed: 42,
        model: ModelType::default(),
        artifact_path: artifact_path.clone(),
    };
    trainer::train(&config).unwrap();
    assert!(artifact_path.exists());

    // round-trip: the reloaded model predicts on fresh data
    let reloaded = load_model(&config.model, &artifact_path).unwrap();
    let predictions = reloaded
        .predict(&[vec![0.0, 1.0], vec![0.0, -1.0]])
        .unwrap();
    assert_eq!(predictions.len(), 2);
}

#[test]
fn trainer_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = TrainerConfig {
        input_path: dir.path().join("does_not_exist.csv"),
        artifact_path: dir.path().join("model.bin"),
        ..TrainerConfig::default()
    };
    assert!(trainer::train(&config).is_err());
}

#[test]
fn trainer_config_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{
            "input_path": "data/train.csv",
            "target_column": "species",
            "model": { "decision_tree": { "max_depth": 3 } }
        }"#,
    )
    .unwrap();

    let config = TrainerConfig::from_json_file(&config_path).unwrap();
    assert_eq!(config.target_column, "species");
    assert_eq!(config.model, ModelType::DecisionTree { max_depth: Some(3) });
    // unspecified fields fall back to defaults
    assert_eq!(config.test_fraction, 0.2);
    assert_eq!(config.seed, 42);
}
