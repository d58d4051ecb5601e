//! Row filtering by allowed-value sets.

use syndata_model::{Result, Table, Value};

/// One filter clause: keep rows whose `field` value is in `allowed`.
#[derive(Debug, Clone)]
pub struct RowConstraint {
    pub field: String,
    pub allowed: Vec<Value>,
}

impl RowConstraint {
    pub fn new(field: impl Into<String>, allowed: Vec<Value>) -> Self {
        Self {
            field: field.into(),
            allowed,
        }
    }
}

/// Keep only rows satisfying every constraint. Constraints are independent,
/// so their order does not affect the resulting row set. An empty constraint
/// list returns the input table unchanged (moved through, not copied).
///
/// # Errors
///
/// [`SyndataError::UnknownColumn`](syndata_model::SyndataError) when a
/// constraint names a column the table lacks.
pub fn filter_rows(table: Table, constraints: &[RowConstraint]) -> Result<Table> {
    if constraints.is_empty() {
        return Ok(table);
    }
    let mut table = table;
    for constraint in constraints {
        let idx = table.require_column(&constraint.field)?;
        table
            .rows
            .retain(|row| constraint.allowed.contains(&row[idx]));
    }
    Ok(table)
}
