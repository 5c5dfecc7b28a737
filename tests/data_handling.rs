//! Integration tests for dataset extraction and train/test splitting.

use tabular_learn::data_handling::{train_test_split, Dataset};
use tabular_learn::error::PipelineError;
use tabular_learn::table::{Column, Table};

fn labeled_table(n: usize) -> Table {
    Table::new(vec![
        Column::numeric("f1", (0..n).map(|i| Some(i as f64)).collect()),
        Column::numeric("f2", (0..n).map(|i| Some((i * i) as f64)).collect()),
        Column::categorical(
            "label",
            (0..n)
                .map(|i| Some(if i % 2 == 0 { "yes".to_string() } else { "no".to_string() }))
                .collect(),
        ),
    ])
}

// ---------------------------------------------------------------------------
// Dataset::from_table
// ---------------------------------------------------------------------------

#[test]
fn from_table_extracts_features_and_labels() {
    let dataset = Dataset::from_table(&labeled_table(4), "label").unwrap();
    assert_eq!(dataset.n_samples(), 4);
    assert_eq!(dataset.feature_names, vec!["f1", "f2"]);
    assert_eq!(dataset.class_labels, vec!["no", "yes"]);
    // row 0 has label "yes" -> code 1 in sorted order
    assert_eq!(dataset.y, vec![1.0, 0.0, 1.0, 0.0]);
    assert_eq!(dataset.x[2], vec![2.0, 4.0]);
    assert_eq!(dataset.decode_label(1.0), Some("yes"));
}

#[test]
fn from_table_missing_target_errors() {
    let err = Dataset::from_table(&labeled_table(4), "target").unwrap_err();
    assert!(matches!(err, PipelineError::MissingColumn(name) if name == "target"));
}

#[test]
fn from_table_categorical_feature_errors() {
    let table = Table::new(vec![
        Column::categorical("color", vec![Some("red".into()), Some("blue".into())]),
        Column::numeric("label", vec![Some(0.0), Some(1.0)]),
    ]);
    let err = Dataset::from_table(&table, "label").unwrap_err();
    assert!(matches!(err, PipelineError::NonNumericFeature(name) if name == "color"));
}

#[test]
fn from_table_missing_value_errors() {
    let table = Table::new(vec![
        Column::numeric("f1", vec![Some(1.0), None]),
        Column::numeric("label", vec![Some(0.0), Some(1.0)]),
    ]);
    let err = Dataset::from_table(&table, "label").unwrap_err();
    assert!(matches!(err, PipelineError::MissingValue { row: 1, .. }));
}

#[test]
fn numeric_target_is_encoded_in_sorted_order() {
    let table = Table::new(vec![
        Column::numeric("f1", vec![Some(1.0), Some(2.0), Some(3.0)]),
        Column::numeric("label", vec![Some(7.0), Some(2.0), Some(7.0)]),
    ]);
    let dataset = Dataset::from_table(&table, "label").unwrap();
    assert_eq!(dataset.class_labels, vec!["2", "7"]);
    assert_eq!(dataset.y, vec![1.0, 0.0, 1.0]);
}

#[test]
fn numeric_target_sorts_numerically_not_lexically() {
    // "10" < "2" as text; class codes must follow numeric order anyway.
    let table = Table::new(vec![
        Column::numeric("f1", vec![Some(1.0), Some(2.0), Some(3.0)]),
        Column::numeric("label", vec![Some(10.0), Some(2.0), Some(10.0)]),
    ]);
    let dataset = Dataset::from_table(&table, "label").unwrap();
    assert_eq!(dataset.class_labels, vec!["2", "10"]);
    assert_eq!(dataset.y, vec![1.0, 0.0, 1.0]);
    assert_eq!(dataset.decode_label(1.0), Some("10"));
}

// ---------------------------------------------------------------------------
// train_test_split
// ---------------------------------------------------------------------------

#[test]
fn split_counts_sum_and_are_disjoint() {
    let dataset = Dataset::from_table(&labeled_table(10), "label").unwrap();
    let split = train_test_split(&dataset, 0.2, 42).unwrap();

    assert_eq!(split.x_train.len() + split.x_test.len(), 10);
    assert_eq!(split.x_train.len(), split.y_train.len());
    assert_eq!(split.x_test.len(), split.y_test.len());

    // f1 values are unique per row, so they identify rows across partitions
    let train_ids: Vec<f64> = split.x_train.iter().map(|r| r[0]).collect();
    for row in &split.x_test {
        assert!(!train_ids.contains(&row[0]), "row {:?} appears in both partitions", row);
    }
}

#[test]
fn split_with_fixed_seed_is_reproducible() {
    let dataset = Dataset::from_table(&labeled_table(20), "label").unwrap();
    let a = train_test_split(&dataset, 0.3, 7).unwrap();
    let b = train_test_split(&dataset, 0.3, 7).unwrap();
    assert_eq!(a.x_train, b.x_train);
    assert_eq!(a.x_test, b.x_test);
    assert_eq!(a.y_train, b.y_train);
    assert_eq!(a.y_test, b.y_test);
}

#[test]
fn split_ten_rows_fraction_point_two_gives_eight_two() {
    let dataset = Dataset::from_table(&labeled_table(10), "label").unwrap();
    let split = train_test_split(&dataset, 0.2, 42).unwrap();
    assert_eq!(split.x_train.len(), 8);
    assert_eq!(split.x_test.len(), 2);
}

#[test]
fn split_rejects_invalid_fractions() {
    let dataset = Dataset::from_table(&labeled_table(10), "label").unwrap();
    for fraction in [0.0, 1.0, -0.5, 1.5] {
        let err = train_test_split(&dataset, fraction, 42).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidTestFraction(_)));
    }
}
