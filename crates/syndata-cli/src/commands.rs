//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use syndata_ingest::{load_bin_specs, load_schema, parse_cell, read_table, save_table};
use syndata_model::{BinSpecs, Value};
use syndata_transform::{DecodeOptions, RowConstraint, build_bins, decode, encode, filter_rows};

use crate::cli::{DecodeArgs, EncodeArgs};

pub fn run_encode(args: &EncodeArgs) -> Result<PathBuf> {
    let schema = load_schema(&args.schema)?;
    let specs = load_optional_bins(args.bins.as_deref())?;
    let table = read_table(&args.input)?;
    info!(rows = table.height(), columns = table.width(), "loaded table");

    let table = filter_rows(table, &parse_filters(&args.filters)?)?;
    let coded = encode(&table, &schema, &specs)?;

    let (dir, name) = output_target(
        &args.input,
        args.output_dir.as_deref(),
        args.name.as_deref(),
        "coded",
    )?;
    let path = save_table(&coded, &dir, &name)?;
    info!(path = %path.display(), rows = coded.height(), "wrote coded table");
    Ok(path)
}

pub fn run_decode(args: &DecodeArgs) -> Result<PathBuf> {
    let schema = load_schema(&args.schema)?;
    let specs = load_optional_bins(args.bins.as_deref())?;
    let bins = build_bins(&specs);
    let table = read_table(&args.input)?;
    info!(rows = table.height(), columns = table.width(), "loaded coded table");

    let table = filter_rows(table, &parse_filters(&args.filters)?)?;
    let options = DecodeOptions {
        handle_inf: !args.keep_inf,
    };
    let raw = decode(&table, &schema, &bins, options)?;

    let (dir, name) = output_target(
        &args.input,
        args.output_dir.as_deref(),
        args.name.as_deref(),
        "decoded",
    )?;
    let path = save_table(&raw, &dir, &name)?;
    info!(path = %path.display(), rows = raw.height(), "wrote decoded table");
    Ok(path)
}

fn load_optional_bins(path: Option<&Path>) -> Result<BinSpecs> {
    match path {
        Some(path) => load_bin_specs(path),
        None => Ok(BinSpecs::default()),
    }
}

/// Parse repeated `FIELD=V1,V2` flags into row constraints. Values get the
/// same type inference as CSV cells.
fn parse_filters(raw: &[String]) -> Result<Vec<RowConstraint>> {
    raw.iter()
        .map(|spec| {
            let (field, values) = spec
                .split_once('=')
                .with_context(|| format!("filter `{spec}` is not of the form FIELD=V1,V2"))?;
            let allowed: Vec<Value> = values.split(',').map(parse_cell).collect();
            Ok(RowConstraint::new(field.trim(), allowed))
        })
        .collect()
}

fn output_target(
    input: &Path,
    output_dir: Option<&Path>,
    name: Option<&str>,
    suffix: &str,
) -> Result<(PathBuf, String)> {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| {
            input
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
        })
        .unwrap_or_else(|| PathBuf::from("."));
    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let stem = input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .with_context(|| format!("input `{}` has no usable file name", input.display()))?;
            format!("{stem}_{suffix}")
        }
    };
    Ok((dir, name))
}
