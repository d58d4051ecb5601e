use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyndataError {
    #[error("schema mismatch: column `{0}` is not covered by the schema or bin table")]
    SchemaMismatch(String),
    #[error("column `{column}`: cannot coerce `{value}` to a number")]
    NumericCoercion { column: String, value: String },
    #[error("column `{column}`: code {code} is outside the decodable range")]
    CodeOutOfRange { column: String, code: i64 },
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
    #[error("invalid descriptor for field `{field}`: {reason}")]
    InvalidDescriptor { field: String, reason: String },
    #[error("invalid bin specification for field `{field}`: {reason}")]
    InvalidBinSpec { field: String, reason: String },
    #[error("column `{0}` does not have the `<field>_<period>` wide form")]
    MalformedWideColumn(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SyndataError>;
