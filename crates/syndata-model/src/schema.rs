//! Per-field schema descriptors.
//!
//! The on-disk schema is a loosely-typed JSON mapping; it is parsed once at
//! load time into the closed [`FieldKind`] variants so that encode/decode
//! logic never sees a malformed descriptor.

use std::collections::BTreeMap;

use crate::error::SyndataError;
use crate::table::Value;

/// A field descriptor as it appears in a schema JSON file.
///
/// Extra keys the scoring pipeline carries (`kind`, `max`, ...) are accepted
/// and ignored; only the keys that drive encoding are interpreted.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawFieldDescriptor {
    pub kind: Option<String>,
    pub values: Option<Vec<Value>>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    #[serde(default)]
    pub has_null: bool,
    pub null_value: Option<Value>,
}

/// Validated encoding kind for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Enumerated domain; position in `values` is the code.
    Categorical { values: Vec<Value> },
    /// Integer domain bounded below by `min`, encoded as `raw - min`.
    /// A declared `null_value` sentinel encodes to `-1`.
    Ordinal {
        min: i64,
        null_value: Option<Value>,
    },
    /// Identifier field, copied through unchanged.
    Passthrough,
}

impl FieldKind {
    fn from_raw(field: &str, raw: RawFieldDescriptor) -> Result<Self, SyndataError> {
        let invalid = |reason: &str| SyndataError::InvalidDescriptor {
            field: field.to_string(),
            reason: reason.to_string(),
        };
        match (raw.values, raw.min) {
            (Some(_), Some(_)) => Err(invalid("declares both `values` and `min`")),
            (Some(values), None) => {
                if raw.has_null {
                    return Err(invalid("`has_null` is only valid on `min` fields"));
                }
                if values.is_empty() {
                    return Err(invalid("`values` is empty"));
                }
                Ok(FieldKind::Categorical { values })
            }
            (None, Some(min)) => {
                let null_value = match (raw.has_null, raw.null_value) {
                    (true, Some(v)) => Some(v),
                    (true, None) => return Err(invalid("`has_null` without `null_value`")),
                    (false, _) => None,
                };
                Ok(FieldKind::Ordinal { min, null_value })
            }
            (None, None) => Ok(FieldKind::Passthrough),
        }
    }
}

/// Field name to [`FieldKind`] mapping, validated at load time.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(try_from = "BTreeMap<String, RawFieldDescriptor>")]
pub struct Schema {
    fields: BTreeMap<String, FieldKind>,
}

impl Schema {
    pub fn get(&self, field: &str) -> Option<&FieldKind> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldKind)> {
        self.fields.iter()
    }
}

impl TryFrom<BTreeMap<String, RawFieldDescriptor>> for Schema {
    type Error = SyndataError;

    fn try_from(raw: BTreeMap<String, RawFieldDescriptor>) -> Result<Self, Self::Error> {
        let mut fields = BTreeMap::new();
        for (field, descriptor) in raw {
            let kind = FieldKind::from_raw(&field, descriptor)?;
            fields.insert(field, kind);
        }
        Ok(Self { fields })
    }
}

impl FromIterator<(String, FieldKind)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, FieldKind)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
