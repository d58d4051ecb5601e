//! Numeric table cleanup.

use syndata_model::{Result, SyndataError, Table, Value};

/// Drop every row containing the textual `marker` (a suppressed-record
/// marker such as `"N"`), then coerce all remaining text cells to numbers.
/// `Missing` cells are kept as `Missing`.
///
/// # Errors
///
/// [`SyndataError::NumericCoercion`] when a surviving text cell is not
/// numeric.
pub fn drop_non_numeric(table: Table, marker: &str) -> Result<Table> {
    let mut table = table;
    table
        .rows
        .retain(|row| !row.iter().any(|cell| matches!(cell, Value::Text(s) if s == marker)));

    let columns = table.columns.clone();
    for row in &mut table.rows {
        for (idx, cell) in row.iter_mut().enumerate() {
            if let Value::Text(raw) = cell {
                let trimmed = raw.trim();
                let parsed = trimmed
                    .parse::<i64>()
                    .map(Value::Int)
                    .or_else(|_| trimmed.parse::<f64>().map(Value::Float))
                    .map_err(|_| SyndataError::NumericCoercion {
                        column: columns[idx].clone(),
                        value: raw.clone(),
                    })?;
                *cell = parsed;
            }
        }
    }
    Ok(table)
}
