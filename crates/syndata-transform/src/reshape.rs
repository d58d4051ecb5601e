//! Long/wide reshaping of per-individual period records.
//!
//! `unstack` pivots a long table keyed by (individual, period) into one row
//! per individual with `FIELD_PERIOD` columns, filling absent periods with
//! the `-1` no-record sentinel. `stack` inverts the pivot and drops the
//! filled rows, recovering the recorded subset.

use std::cmp::Ordering;
use std::collections::HashMap;

use syndata_model::{Result, SyndataError, Table, Value};

/// The fill for (individual, period) pairs with no record.
const NO_RECORD: Value = Value::Int(-1);

/// Pivot a long table into wide form, one row per individual.
///
/// All columns other than `user_id` and `period` become
/// `{field}_{period}` columns, field-major over the sorted distinct
/// periods. Individuals are sorted as well, matching a pivoted index.
///
/// # Errors
///
/// [`SyndataError::UnknownColumn`] when `user_id` or `period` is not a
/// column of the table.
pub fn unstack(table: &Table, user_id: &str, period: &str) -> Result<Table> {
    let uid_idx = table.require_column(user_id)?;
    let period_idx = table.require_column(period)?;
    let field_indices: Vec<usize> = (0..table.width())
        .filter(|idx| *idx != uid_idx && *idx != period_idx)
        .collect();

    let periods = sorted_distinct(table, period_idx);
    let individuals = sorted_distinct(table, uid_idx);

    let mut columns = vec![user_id.to_string()];
    for &field_idx in &field_indices {
        for per in &periods {
            columns.push(format!("{}_{}", table.columns[field_idx], per));
        }
    }

    // (individual slot, period slot) -> field cells; later records win.
    let mut grid: HashMap<(usize, usize), Vec<Value>> = HashMap::new();
    for row in &table.rows {
        let u = position_of(&individuals, &row[uid_idx]);
        let p = position_of(&periods, &row[period_idx]);
        let cells: Vec<Value> = field_indices.iter().map(|&idx| row[idx].clone()).collect();
        grid.insert((u, p), cells);
    }

    let mut wide = Table::new(columns);
    for (u, individual) in individuals.iter().enumerate() {
        let mut row = Vec::with_capacity(wide.width());
        row.push(individual.clone());
        for field_slot in 0..field_indices.len() {
            for p in 0..periods.len() {
                let cell = grid
                    .get(&(u, p))
                    .map_or(NO_RECORD, |cells| cells[field_slot].clone());
                row.push(cell);
            }
        }
        wide.push_row(row);
    }
    Ok(wide)
}

/// Invert [`unstack`]: rebuild the long (individual, period) rows, dropping
/// any reconstructed row that contains the `-1` no-record fill.
///
/// # Errors
///
/// [`SyndataError::UnknownColumn`] when `user_id` is missing, and
/// [`SyndataError::MalformedWideColumn`] when a column does not have the
/// `{field}_{period}` form.
pub fn stack(table: &Table, user_id: &str, period: &str) -> Result<Table> {
    let uid_idx = table.require_column(user_id)?;

    let mut fields: Vec<String> = Vec::new();
    let mut periods: Vec<String> = Vec::new();
    // (field slot, period slot) -> wide column index
    let mut layout: HashMap<(usize, usize), usize> = HashMap::new();
    for (idx, name) in table.columns.iter().enumerate() {
        if idx == uid_idx {
            continue;
        }
        let (field, per) = name
            .rsplit_once('_')
            .ok_or_else(|| SyndataError::MalformedWideColumn(name.clone()))?;
        let field_slot = slot_of(&mut fields, field);
        let period_slot = slot_of(&mut periods, per);
        layout.insert((field_slot, period_slot), idx);
    }

    let mut columns = vec![user_id.to_string(), period.to_string()];
    columns.extend(fields.iter().cloned());
    let mut long = Table::new(columns);

    for row in &table.rows {
        for (period_slot, per) in periods.iter().enumerate() {
            let mut cells = Vec::with_capacity(long.width());
            cells.push(row[uid_idx].clone());
            cells.push(parse_scalar(per));
            let mut filled = false;
            for field_slot in 0..fields.len() {
                let cell = layout
                    .get(&(field_slot, period_slot))
                    .map_or(NO_RECORD, |&idx| row[idx].clone());
                if cell == NO_RECORD {
                    filled = true;
                    break;
                }
                cells.push(cell);
            }
            if !filled {
                long.push_row(cells);
            }
        }
    }
    Ok(long)
}

fn sorted_distinct(table: &Table, idx: usize) -> Vec<Value> {
    let mut seen: Vec<Value> = Vec::new();
    for value in table.column_values(idx) {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen.sort_by(value_order);
    seen
}

fn position_of(values: &[Value], value: &Value) -> usize {
    values.iter().position(|v| v == value).unwrap_or_default()
}

fn slot_of(names: &mut Vec<String>, name: &str) -> usize {
    match names.iter().position(|n| n == name) {
        Some(pos) => pos,
        None => {
            names.push(name.to_string());
            names.len() - 1
        }
    }
}

/// Total order for pivot keys: numbers before text before missing.
fn value_order(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => match (a, b) {
            (Value::Text(x), Value::Text(y)) => x.cmp(y),
            (Value::Missing, Value::Missing) => Ordering::Equal,
            (Value::Missing, _) => Ordering::Greater,
            (_, Value::Missing) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

fn parse_scalar(raw: &str) -> Value {
    if let Ok(v) = raw.parse::<i64>() {
        Value::Int(v)
    } else if let Ok(v) = raw.parse::<f64>() {
        Value::Float(v)
    } else {
        Value::Text(raw.to_string())
    }
}
