//! Inverse of the schema-driven encoder.

use syndata_model::{Result, Schema, SyndataError, Table};
use tracing::debug;

use crate::bins::BinTable;
use crate::dispatch::ColumnCodec;

/// Decoding options.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Substitute a finite proxy when a bin's lower edge is `-inf`, so that
    /// decoding never emits an infinite value. Defaults to true.
    pub handle_inf: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { handle_inf: true }
    }
}

/// Decode an integer-coded table back to representative raw values,
/// leaving the input untouched.
///
/// Binned columns decode to the bin's lower edge, so continuous fields
/// round-trip only to within their bin. Categorical and ordinal columns
/// round-trip exactly; code `-1` decodes to the unmapped marker
/// ([`Value::Missing`](syndata_model::Value)) for binned and categorical
/// columns and to the declared null sentinel for nullable ordinal columns.
///
/// # Errors
///
/// A column covered by neither `bins` nor `schema` is a
/// [`SyndataError::SchemaMismatch`]; guessing would corrupt downstream
/// comparisons. Codes outside the decodable range are
/// [`SyndataError::CodeOutOfRange`].
pub fn decode(
    table: &Table,
    schema: &Schema,
    bins: &BinTable,
    options: DecodeOptions,
) -> Result<Table> {
    let mut raw = table.clone();
    decode_in_place(&mut raw, schema, bins, options)?;
    Ok(raw)
}

/// Decode a table in place. Same contract as [`decode`].
pub fn decode_in_place(
    table: &mut Table,
    schema: &Schema,
    bins: &BinTable,
    options: DecodeOptions,
) -> Result<()> {
    let columns = table.columns.clone();
    for (idx, column) in columns.iter().enumerate() {
        let codec = ColumnCodec::resolve(column, schema, bins)
            .ok_or_else(|| SyndataError::SchemaMismatch(column.clone()))?;
        if codec.is_passthrough() {
            continue;
        }
        debug!(column = %column, rows = table.height(), "decoding column");
        for row in &mut table.rows {
            row[idx] = codec.decode(column, &row[idx], options.handle_inf)?;
        }
    }
    Ok(())
}
