//! Decoder tests.

use syndata_model::{BinSpecs, Schema, SyndataError, Table, Value};
use syndata_transform::{BinTable, DecodeOptions, build_bins, decode, encode};

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
fn categorical_round_trip_over_the_declared_domain() {
    let schema = schema(r#"{"city": {"values": ["BOS", "NYC", "SFO"]}}"#);
    let values = vec![
        Value::Text("BOS".into()),
        Value::Text("NYC".into()),
        Value::Text("SFO".into()),
    ];
    let table = single_column("city", values.clone());

    let coded = encode(&table, &schema, &BinSpecs::default()).unwrap();
    let raw = decode(&coded, &schema, &BinTable::new(), DecodeOptions::default()).unwrap();
    assert_eq!(column(&raw, 0), values);
}

#[test]
fn unmapped_category_stays_unmapped() {
    let schema = schema(r#"{"city": {"values": ["BOS", "NYC"]}}"#);
    let table = single_column("city", vec![Value::Text("LAX".into())]);

    let coded = encode(&table, &schema, &BinSpecs::default()).unwrap();
    assert_eq!(coded.rows[0], vec![Value::Int(-1)]);

    let raw = decode(&coded, &schema, &BinTable::new(), DecodeOptions::default()).unwrap();
    assert_eq!(raw.rows[0], vec![Value::Missing]);
}

#[test]
fn ordinal_round_trip_with_and_without_null() {
    let schema = schema(r#"{"age": {"min": 0, "has_null": true, "null_value": -9}}"#);
    let values = vec![Value::Int(-9), Value::Int(0), Value::Int(42)];
    let table = single_column("age", values.clone());

    let coded = encode(&table, &schema, &BinSpecs::default()).unwrap();
    assert_eq!(
        column(&coded, 0),
        vec![Value::Int(-1), Value::Int(0), Value::Int(42)]
    );
    let raw = decode(&coded, &schema, &BinTable::new(), DecodeOptions::default()).unwrap();
    assert_eq!(column(&raw, 0), values);
}

#[test]
fn binned_codes_decode_to_the_lower_edge() {
    let spec = specs(r#"{"income": {"first_bin_max": 0, "last_bin_min": 100, "bin_size": 10}}"#);
    let bins = build_bins(&spec);
    let coded = single_column("income", vec![Value::Int(5), Value::Int(10)]);

    let raw = decode(&coded, &Schema::default(), &bins, DecodeOptions::default()).unwrap();
    // code 5 -> [40, 50), code 10 -> [90, +inf)
    assert_eq!(column(&raw, 0), vec![Value::Float(40.0), Value::Float(90.0)]);
}

#[test]
fn low_bracket_gets_a_finite_proxy_unless_disabled() {
    let spec = specs(r#"{"income": {"first_bin_max": 0, "last_bin_min": 100, "bin_size": 10}}"#);
    let bins = build_bins(&spec);
    let coded = single_column("income", vec![Value::Int(0)]);

    let raw = decode(&coded, &Schema::default(), &bins, DecodeOptions::default()).unwrap();
    assert_eq!(raw.rows[0], vec![Value::Float(-1.0)]);

    let raw = decode(
        &coded,
        &Schema::default(),
        &bins,
        DecodeOptions { handle_inf: false },
    )
    .unwrap();
    assert_eq!(raw.rows[0], vec![Value::Float(f64::NEG_INFINITY)]);
}

#[test]
fn binned_sentinel_code_decodes_to_missing() {
    let spec = specs(r#"{"income": {"first_bin_max": 0, "last_bin_min": 100, "bin_size": 10}}"#);
    let bins = build_bins(&spec);
    let coded = single_column("income", vec![Value::Int(-1)]);

    let raw = decode(&coded, &Schema::default(), &bins, DecodeOptions::default()).unwrap();
    assert_eq!(raw.rows[0], vec![Value::Missing]);
}

#[test]
fn out_of_range_code_is_an_error() {
    let spec = specs(r#"{"income": {"first_bin_max": 0, "last_bin_min": 100, "bin_size": 10}}"#);
    let bins = build_bins(&spec);
    let coded = single_column("income", vec![Value::Int(99)]);

    let err = decode(&coded, &Schema::default(), &bins, DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, SyndataError::CodeOutOfRange { code: 99, .. }));
}

#[test]
fn unknown_column_is_a_schema_mismatch() {
    let coded = single_column("mystery", vec![Value::Int(1)]);

    let err = decode(
        &coded,
        &Schema::default(),
        &BinTable::new(),
        DecodeOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SyndataError::SchemaMismatch(ref c) if c == "mystery"));
}

#[test]
fn passthrough_columns_survive_decoding() {
    let schema = schema(r#"{"PUMA": {"kind": "id"}}"#);
    let coded = single_column("PUMA", vec![Value::Text("17-1001".into())]);

    let raw = decode(&coded, &schema, &BinTable::new(), DecodeOptions::default()).unwrap();
    assert_eq!(raw.rows[0], vec![Value::Text("17-1001".into())]);
}
