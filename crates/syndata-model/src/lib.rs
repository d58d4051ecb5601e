pub mod bins;
pub mod error;
pub mod schema;
pub mod table;

pub use bins::{BinRange, BinSpecs, RawBinRange};
pub use error::{Result, SyndataError};
pub use schema::{FieldKind, RawFieldDescriptor, Schema};
pub use table::{Table, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_and_bins_load_from_one_document_each() {
        let schema: Schema =
            serde_json::from_str(r#"{"SEX": {"values": [1, 2]}, "ID": {"kind": "id"}}"#).unwrap();
        assert!(schema.contains("SEX"));

        let specs: BinSpecs = serde_json::from_str(
            r#"{"AGEP": {"first_bin_max": 5, "last_bin_min": 90, "bin_size": 5}}"#,
        )
        .unwrap();
        assert!(specs.contains("AGEP"));
    }
}
