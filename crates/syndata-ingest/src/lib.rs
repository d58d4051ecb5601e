//! Loading and persistence at the edges of the pipeline.
//!
//! - **csv**: typed CSV ingestion and `Table` persistence
//! - **json**: schema and bin-spec loading, validated at parse time

pub mod csv;
pub mod json;

pub use csv::{parse_cell, read_table, save_table};
pub use json::{load_bin_specs, load_schema, read_json};
