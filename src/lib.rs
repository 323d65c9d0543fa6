//! Query engine behind a searchable, taggable, paginated resource table.
//!
//! A [`ResourceQueryEngine`] reads a CSV sheet of resources, derives the tag
//! vocabulary from its `Keywords` column, filters by free text and selected
//! tags, and returns one page of matches. Rendering is left to the caller.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;

pub use config::EngineConfig;
pub use data::filter::Query;
pub use data::loader::{CsvFileSource, CsvTextSource, ResourceSource};
pub use data::model::{Dataset, Record, Schema};
pub use data::paginate::{Page, PageLinks};
pub use data::params::QueryParams;
pub use engine::{QueryResult, ResourceQueryEngine};
pub use error::{ConfigError, LoadError};
