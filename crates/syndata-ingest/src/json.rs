//! JSON configuration loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use syndata_model::{BinSpecs, Schema};

/// Read an arbitrary JSON document.
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let file = File::open(path).with_context(|| format!("open json: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse json: {}", path.display()))
}

/// Load and validate a schema file. Descriptor problems surface here, not
/// inside encode/decode.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let file = File::open(path).with_context(|| format!("open schema: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse schema: {}", path.display()))
}

/// Load and validate a bin specification file.
pub fn load_bin_specs(path: &Path) -> Result<BinSpecs> {
    let file = File::open(path).with_context(|| format!("open bin specs: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse bin specs: {}", path.display()))
}
