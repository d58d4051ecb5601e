//! Encoder tests.

use syndata_model::{BinSpecs, Schema, SyndataError, Table, Value};
use syndata_transform::{encode, encode_in_place};

fn schema(json: &str) -> Schema {
    serde_json::from_str(json).unwrap()
}

fn specs(json: &str) -> BinSpecs {
    serde_json::from_str(json).unwrap()
}

fn single_column(name: &str, cells: Vec<Value>) -> Table {
    let mut table = Table::new(vec![name.to_string()]);
    for cell in cells {
        table.push_row(vec![cell]);
    }
    table
}

fn column(table: &Table, idx: usize) -> Vec<Value> {
    table.rows.iter().map(|row| row[idx].clone()).collect()
}

#[test]
fn ordinal_with_null_sentinel() {
    let schema = schema(r#"{"age": {"min": 0, "has_null": true, "null_value": -9}}"#);
    let table = single_column("age", vec![Value::Int(-9), Value::Int(42), Value::Int(0)]);

    let coded = encode(&table, &schema, &BinSpecs::default()).unwrap();
    assert_eq!(
        column(&coded, 0),
        vec![Value::Int(-1), Value::Int(42), Value::Int(0)]
    );
}

#[test]
fn ordinal_shifts_by_min() {
    let schema = schema(r#"{"year": {"min": 2010}}"#);
    let table = single_column("year", vec![Value::Int(2010), Value::Int(2018)]);

    let coded = encode(&table, &schema, &BinSpecs::default()).unwrap();
    assert_eq!(column(&coded, 0), vec![Value::Int(0), Value::Int(8)]);
}

#[test]
fn categorical_codes_follow_declared_order() {
    let schema = schema(r#"{"city": {"values": ["BOS", "NYC", "SFO"]}}"#);
    let table = single_column(
        "city",
        vec![
            Value::Text("NYC".into()),
            Value::Text("BOS".into()),
            Value::Text("LAX".into()),
            Value::Missing,
        ],
    );

    let coded = encode(&table, &schema, &BinSpecs::default()).unwrap();
    assert_eq!(
        column(&coded, 0),
        vec![Value::Int(1), Value::Int(0), Value::Int(-1), Value::Int(-1)]
    );
}

#[test]
fn binned_codes_use_right_exclusive_bins() {
    // cuts: [-inf, 0, 10, ..., 90, +inf]
    let spec = specs(r#"{"income": {"first_bin_max": 0, "last_bin_min": 100, "bin_size": 10}}"#);
    let table = single_column(
        "income",
        vec![
            Value::Int(-5),
            Value::Int(0),
            Value::Int(45),
            Value::Int(90),
            Value::Int(12345),
        ],
    );

    let coded = encode(&table, &Schema::default(), &spec).unwrap();
    assert_eq!(
        column(&coded, 0),
        vec![
            Value::Int(0),
            Value::Int(1),
            Value::Int(5),
            Value::Int(10),
            Value::Int(10),
        ]
    );
}

#[test]
fn binned_nullable_field_folds_sentinel_into_low_bracket() {
    let schema = schema(r#"{"hours": {"min": 0, "has_null": true, "null_value": "N"}}"#);
    let spec = specs(r#"{"hours": {"first_bin_max": 0, "last_bin_min": 40, "bin_size": 10}}"#);
    let table = single_column("hours", vec![Value::Text("N".into()), Value::Int(20)]);

    let coded = encode(&table, &schema, &spec).unwrap();
    // "N" -> min - 1 = -1 -> the [-inf, 0) bracket
    assert_eq!(column(&coded, 0), vec![Value::Int(0), Value::Int(3)]);
}

#[test]
fn time_binned_column() {
    let spec = specs(
        r#"{"pickup": {
            "bin_type": "time",
            "first_bin_max_hour": 0,
            "last_bin_min_hour": 2,
            "bin_size_minutes": 30
        }}"#,
    );
    let table = single_column("pickup", vec![Value::Int(45), Value::Int(130)]);

    let coded = encode(&table, &Schema::default(), &spec).unwrap();
    // 45 falls in [30, 100), 130 in [130, +inf)
    assert_eq!(column(&coded, 0), vec![Value::Int(2), Value::Int(4)]);
}

#[test]
fn unscheduled_and_passthrough_columns_are_untouched() {
    let schema = schema(r#"{"PUMA": {"kind": "id"}, "sex": {"values": [1, 2]}}"#);
    let mut table = Table::new(vec!["PUMA".into(), "opaque".into(), "sex".into()]);
    table.push_row(vec![
        Value::Text("17-1001".into()),
        Value::Text("x".into()),
        Value::Int(2),
    ]);

    let coded = encode(&table, &schema, &BinSpecs::default()).unwrap();
    assert_eq!(
        coded.rows[0],
        vec![
            Value::Text("17-1001".into()),
            Value::Text("x".into()),
            Value::Int(1),
        ]
    );
}

#[test]
fn encode_leaves_input_untouched_and_in_place_does_not() {
    let schema = schema(r#"{"age": {"min": 10}}"#);
    let mut table = single_column("age", vec![Value::Int(15)]);
    let snapshot = table.clone();

    let coded = encode(&table, &schema, &BinSpecs::default()).unwrap();
    assert_eq!(table, snapshot);
    assert_eq!(coded.rows[0], vec![Value::Int(5)]);

    encode_in_place(&mut table, &schema, &BinSpecs::default()).unwrap();
    assert_eq!(table, coded);
}

#[test]
fn non_numeric_cell_in_ordinal_column_is_a_coercion_failure() {
    let schema = schema(r#"{"age": {"min": 0}}"#);
    let table = single_column("age", vec![Value::Text("unknown".into())]);

    let err = encode(&table, &schema, &BinSpecs::default()).unwrap_err();
    assert!(matches!(
        err,
        SyndataError::NumericCoercion { ref column, .. } if column == "age"
    ));
}
