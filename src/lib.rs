//! tabular-learn: a small classical machine-learning pipeline for tabular
//! classification.
//!
//! The crate covers the whole workflow: loading delimited text into a typed
//! in-memory table, cleaning and standardizing it, splitting into train/test
//! partitions, training one of four off-the-shelf classifier families behind
//! a uniform trait, persisting the trained model, and reporting standard
//! classification metrics. The learning algorithms themselves come from
//! `smartcore`; this crate owns the data model, the dispatch layer, and the
//! orchestration.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod preprocessing;
pub mod table;
pub mod trainer;
