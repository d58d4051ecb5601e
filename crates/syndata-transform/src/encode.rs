//! Schema-driven encoding of raw tables into integer codes.

use syndata_model::{BinSpecs, Result, Schema, Table};
use tracing::debug;

use crate::bins::build_bins;
use crate::dispatch::ColumnCodec;

/// Encode a raw table into integer codes, leaving the input untouched.
///
/// Binned columns get the index of the half-open bin the value falls into,
/// categorical columns the 0-based position in their declared value list
/// (`-1` for values outside it), ordinal columns `raw - min` (with a
/// declared null sentinel encoding to `-1`). Columns the schema and bin
/// specification do not mention are copied unchanged.
///
/// # Errors
///
/// Returns [`SyndataError::NumericCoercion`](syndata_model::SyndataError)
/// when a binned or ordinal cell has no numeric reading.
pub fn encode(table: &Table, schema: &Schema, specs: &BinSpecs) -> Result<Table> {
    let mut coded = table.clone();
    encode_in_place(&mut coded, schema, specs)?;
    Ok(coded)
}

/// Encode a table in place. Same contract as [`encode`], mutating the
/// caller's table instead of copying it.
///
/// On error the table is left partially encoded; callers that need the
/// original on failure should use [`encode`].
pub fn encode_in_place(table: &mut Table, schema: &Schema, specs: &BinSpecs) -> Result<()> {
    let bins = build_bins(specs);
    let columns = table.columns.clone();
    for (idx, column) in columns.iter().enumerate() {
        // Absent from schema and bins: identity passthrough by design
        // (opaque ID columns are never part of the schema).
        let Some(codec) = ColumnCodec::resolve(column, schema, &bins) else {
            continue;
        };
        if codec.is_passthrough() {
            continue;
        }
        debug!(column = %column, rows = table.height(), "encoding column");
        for row in &mut table.rows {
            row[idx] = codec.encode(column, &row[idx])?;
        }
    }
    Ok(())
}
