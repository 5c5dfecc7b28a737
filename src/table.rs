//! In-memory tabular dataset: named columns with a shared row count.
//!
//! A `Table` is the unit of exchange between the loader, the cleaning and
//! normalization steps, and the dataset builder. Columns are either numeric
//! or categorical; missing values are represented as `None` so that cleaning
//! can drop them explicitly instead of smuggling NaNs through the pipeline.

use std::collections::HashSet;

/// Values of a single column. All columns of a table have the same length.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Numeric(_))
    }

    /// Whether the value at `row` is missing.
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            ColumnData::Numeric(values) => values[row].is_none(),
            ColumnData::Categorical(values) => values[row].is_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Categorical(values),
        }
    }
}

/// An ordered collection of named columns with equal lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

/// A hashable key identifying the exact content of one row. Numeric cells
/// are compared bit-for-bit, which is what exact-duplicate removal wants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKeyPart {
    Number(u64),
    Text(String),
    Missing,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        if let Some(first) = columns.first() {
            let n = first.data.len();
            assert!(
                columns.iter().all(|c| c.data.len() == n),
                "all columns of a table must have equal length"
            );
        }
        Table { columns }
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether any cell of `row` is missing.
    pub fn row_has_missing(&self, row: usize) -> bool {
        self.columns.iter().any(|c| c.data.is_missing(row))
    }

    /// Content key for duplicate detection.
    pub fn row_key(&self, row: usize) -> Vec<RowKeyPart> {
        self.columns
            .iter()
            .map(|c| match &c.data {
                ColumnData::Numeric(values) => match values[row] {
                    Some(v) => RowKeyPart::Number(v.to_bits()),
                    None => RowKeyPart::Missing,
                },
                ColumnData::Categorical(values) => match &values[row] {
                    Some(v) => RowKeyPart::Text(v.clone()),
                    None => RowKeyPart::Missing,
                },
            })
            .collect()
    }

    /// A new table containing only the rows selected by `indices`, in order.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                data: match &c.data {
                    ColumnData::Numeric(values) => {
                        ColumnData::Numeric(indices.iter().map(|&i| values[i]).collect())
                    }
                    ColumnData::Categorical(values) => ColumnData::Categorical(
                        indices.iter().map(|&i| values[i].clone()).collect(),
                    ),
                },
            })
            .collect();
        Table { columns }
    }

    /// Row indices whose content has not been seen earlier in the table.
    pub fn first_occurrence_indices(&self) -> Vec<usize> {
        let mut seen: HashSet<Vec<RowKeyPart>> = HashSet::new();
        (0..self.n_rows())
            .filter(|&row| seen.insert(self.row_key(row)))
            .collect()
    }
}
