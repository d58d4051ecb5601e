//! CSV reading and writing for [`Table`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use syndata_model::{Table, Value};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse one CSV cell into a typed value: integer, then float, then text;
/// empty cells become `Missing`.
pub fn parse_cell(raw: &str) -> Value {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        Value::Missing
    } else if let Ok(v) = trimmed.parse::<i64>() {
        Value::Int(v)
    } else if let Ok(v) = trimmed.parse::<f64>() {
        Value::Float(v)
    } else {
        Value::Text(trimmed.to_string())
    }
}

/// Read a CSV file into a typed table.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        table.push_row(record.iter().map(parse_cell).collect());
    }
    debug!(path = %path.display(), rows = table.height(), "read table");
    Ok(table)
}

/// Write a table as `<output_dir>/<name>.csv`, creating the directory if
/// needed, and return the written path.
pub fn save_table(table: &Table, output_dir: &Path, name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let path = output_dir.join(format!("{name}.csv"));
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write headers: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(ToString::to_string))
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(path = %path.display(), rows = table.height(), "saved table");
    Ok(path)
}
