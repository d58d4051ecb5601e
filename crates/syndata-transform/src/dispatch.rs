//! Per-column codec resolution.
//!
//! Which transformation a column gets depends on which of the bin table and
//! schema mention it. That dispatch is resolved once per column into a
//! [`ColumnCodec`] before any row is touched, so the per-row paths never
//! re-inspect the schema.

use syndata_model::{FieldKind, Result, Schema, SyndataError, Value};

use crate::bins::BinTable;

/// Resolved transformation for a single column.
///
/// Precedence follows the encoder contract: a bin-table entry wins over the
/// schema descriptor; within the schema, `values` wins over `min`.
pub(crate) enum ColumnCodec<'a> {
    /// Continuous or time-of-day field with a bin table entry. `null_shift`
    /// carries the declared null sentinel and `min` when the schema also
    /// marks the field nullable.
    Binned {
        cuts: &'a [f64],
        null_shift: Option<(&'a Value, i64)>,
    },
    /// Enumerated field; position in `values` is the code.
    Categorical { values: &'a [Value] },
    /// Zero-shifted integer field.
    Ordinal {
        min: i64,
        null_value: Option<&'a Value>,
    },
    /// Identifier field declared in the schema; copied through.
    Passthrough,
}

impl<'a> ColumnCodec<'a> {
    /// Resolve the codec for `column`, or `None` when neither the bin table
    /// nor the schema covers it.
    pub(crate) fn resolve(column: &str, schema: &'a Schema, bins: &'a BinTable) -> Option<Self> {
        if let Some(cuts) = bins.get(column) {
            let null_shift = match schema.get(column) {
                Some(FieldKind::Ordinal {
                    min,
                    null_value: Some(nv),
                }) => Some((nv, *min)),
                _ => None,
            };
            return Some(ColumnCodec::Binned {
                cuts,
                null_shift,
            });
        }
        match schema.get(column)? {
            FieldKind::Categorical { values } => Some(ColumnCodec::Categorical { values }),
            FieldKind::Ordinal { min, null_value } => Some(ColumnCodec::Ordinal {
                min: *min,
                null_value: null_value.as_ref(),
            }),
            FieldKind::Passthrough => Some(ColumnCodec::Passthrough),
        }
    }

    pub(crate) fn is_passthrough(&self) -> bool {
        matches!(self, ColumnCodec::Passthrough)
    }

    /// Map one raw cell to its integer code.
    pub(crate) fn encode(&self, column: &str, cell: &Value) -> Result<Value> {
        match self {
            ColumnCodec::Binned { cuts, null_shift } => {
                let raw = match null_shift {
                    Some((nv, min)) if cell == *nv => (*min - 1) as f64,
                    _ => match cell {
                        Value::Missing => return Ok(Value::Int(-1)),
                        other => other.as_f64().ok_or_else(|| coercion(column, other))?,
                    },
                };
                Ok(Value::Int(bin_code(cuts, raw)))
            }
            ColumnCodec::Categorical { values } => {
                let code = values
                    .iter()
                    .position(|v| v == cell)
                    .map_or(-1, |pos| pos as i64);
                Ok(Value::Int(code))
            }
            ColumnCodec::Ordinal { min, null_value } => {
                if let Some(nv) = null_value
                    && cell == *nv
                {
                    // min - 1, zero-shifted
                    return Ok(Value::Int(-1));
                }
                let raw = cell.as_i64().ok_or_else(|| coercion(column, cell))?;
                Ok(Value::Int(raw - min))
            }
            ColumnCodec::Passthrough => Ok(cell.clone()),
        }
    }

    /// Map one integer code back to a representative raw cell.
    pub(crate) fn decode(&self, column: &str, cell: &Value, handle_inf: bool) -> Result<Value> {
        match self {
            ColumnCodec::Binned { cuts, .. } => {
                let code = cell.as_i64().ok_or_else(|| coercion(column, cell))?;
                if code == -1 {
                    return Ok(Value::Missing);
                }
                let last_code = cuts.len() as i64 - 2;
                if code < 0 || code > last_code {
                    return Err(out_of_range(column, code));
                }
                let mut edge = cuts[code as usize];
                if handle_inf && edge == f64::NEG_INFINITY {
                    // The low bracket has no finite lower edge; stand in a
                    // value one below the first cut so the result stays in
                    // the bin without being infinite.
                    edge = if cuts[1].is_finite() { cuts[1] - 1.0 } else { 0.0 };
                }
                Ok(Value::Float(edge))
            }
            ColumnCodec::Categorical { values } => {
                let code = cell.as_i64().ok_or_else(|| coercion(column, cell))?;
                if code == -1 {
                    return Ok(Value::Missing);
                }
                usize::try_from(code)
                    .ok()
                    .and_then(|idx| values.get(idx))
                    .cloned()
                    .ok_or_else(|| out_of_range(column, code))
            }
            ColumnCodec::Ordinal { min, null_value } => {
                let code = cell.as_i64().ok_or_else(|| coercion(column, cell))?;
                match null_value {
                    // Checked before the shift: -1 is the sentinel, not an
                    // arithmetic min - 1.
                    Some(nv) if code == -1 => Ok((*nv).clone()),
                    _ => Ok(Value::Int(code + min)),
                }
            }
            ColumnCodec::Passthrough => Ok(cell.clone()),
        }
    }
}

/// Index of the half-open interval `[cuts[i], cuts[i+1])` containing `v`.
///
/// The infinite brackets catch every finite value, so codes span
/// `0 ..= cuts.len() - 2`. NaN (an unparseable numeric upstream) gets the
/// unmapped sentinel.
fn bin_code(cuts: &[f64], v: f64) -> i64 {
    if v.is_nan() {
        return -1;
    }
    let idx = cuts.partition_point(|cut| *cut <= v);
    (idx.clamp(1, cuts.len() - 1) - 1) as i64
}

fn coercion(column: &str, cell: &Value) -> SyndataError {
    SyndataError::NumericCoercion {
        column: column.to_string(),
        value: cell.to_string(),
    }
}

fn out_of_range(column: &str, code: i64) -> SyndataError {
    SyndataError::CodeOutOfRange {
        column: column.to_string(),
        code,
    }
}
