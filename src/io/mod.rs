//! File input for the pipeline.
pub mod csv_reader;

pub use csv_reader::{read_csv, read_csv_with_delimiter};
