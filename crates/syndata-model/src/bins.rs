//! Bin specifications.
//!
//! A bin specification describes, per field, how to lay out the cut points
//! that the bin table builder expands. Like the schema, the JSON form is
//! validated once at load time into closed variants.

use std::collections::BTreeMap;

use crate::error::SyndataError;

/// A bin range entry as it appears in a bin-spec JSON file.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawBinRange {
    pub bin_type: Option<String>,
    pub first_bin_max: Option<f64>,
    pub last_bin_min: Option<f64>,
    pub bin_size: Option<f64>,
    pub first_bin_max_hour: Option<u32>,
    pub last_bin_min_hour: Option<u32>,
    pub bin_size_minutes: Option<u32>,
}

/// Validated bin layout for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum BinRange {
    /// Equal-width bins between two bounds, open below and above.
    Continuous {
        first_bin_max: f64,
        last_bin_min: f64,
        bin_size: f64,
    },
    /// Bins over an HHMM-encoded clock value (`hour * 100 + minute`).
    Time {
        first_bin_max_hour: u32,
        last_bin_min_hour: u32,
        bin_size_minutes: u32,
    },
}

impl BinRange {
    fn from_raw(field: &str, raw: RawBinRange) -> Result<Self, SyndataError> {
        let invalid = |reason: String| SyndataError::InvalidBinSpec {
            field: field.to_string(),
            reason,
        };
        let missing = |key: &str| invalid(format!("missing `{key}`"));
        match raw.bin_type.as_deref() {
            None => {
                let first_bin_max = raw.first_bin_max.ok_or_else(|| missing("first_bin_max"))?;
                let last_bin_min = raw.last_bin_min.ok_or_else(|| missing("last_bin_min"))?;
                let bin_size = raw.bin_size.ok_or_else(|| missing("bin_size"))?;
                if !(bin_size.is_finite() && bin_size > 0.0) {
                    return Err(invalid(format!("`bin_size` must be positive, got {bin_size}")));
                }
                if !first_bin_max.is_finite() || !last_bin_min.is_finite() {
                    return Err(invalid("bounds must be finite".to_string()));
                }
                Ok(BinRange::Continuous {
                    first_bin_max,
                    last_bin_min,
                    bin_size,
                })
            }
            Some("time") => {
                let first_bin_max_hour = raw
                    .first_bin_max_hour
                    .ok_or_else(|| missing("first_bin_max_hour"))?;
                let last_bin_min_hour = raw
                    .last_bin_min_hour
                    .ok_or_else(|| missing("last_bin_min_hour"))?;
                let bin_size_minutes = raw
                    .bin_size_minutes
                    .ok_or_else(|| missing("bin_size_minutes"))?;
                if !(1..=60).contains(&bin_size_minutes) {
                    return Err(invalid(format!(
                        "`bin_size_minutes` must be in 1..=60, got {bin_size_minutes}"
                    )));
                }
                Ok(BinRange::Time {
                    first_bin_max_hour,
                    last_bin_min_hour,
                    bin_size_minutes,
                })
            }
            Some(other) => Err(invalid(format!("unknown `bin_type` `{other}`"))),
        }
    }
}

/// Field name to [`BinRange`] mapping, validated at load time.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(try_from = "BTreeMap<String, RawBinRange>")]
pub struct BinSpecs {
    ranges: BTreeMap<String, BinRange>,
}

impl BinSpecs {
    pub fn get(&self, field: &str) -> Option<&BinRange> {
        self.ranges.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.ranges.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BinRange)> {
        self.ranges.iter()
    }
}

impl TryFrom<BTreeMap<String, RawBinRange>> for BinSpecs {
    type Error = SyndataError;

    fn try_from(raw: BTreeMap<String, RawBinRange>) -> Result<Self, Self::Error> {
        let mut ranges = BTreeMap::new();
        for (field, entry) in raw {
            let range = BinRange::from_raw(&field, entry)?;
            ranges.insert(field, range);
        }
        Ok(Self { ranges })
    }
}

impl FromIterator<(String, BinRange)> for BinSpecs {
    fn from_iter<I: IntoIterator<Item = (String, BinRange)>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<BinSpecs, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn parses_continuous_and_time_ranges() {
        let specs = parse(
            r#"{
                "income": {"first_bin_max": 0, "last_bin_min": 100000, "bin_size": 10000},
                "pickup": {
                    "bin_type": "time",
                    "first_bin_max_hour": 0,
                    "last_bin_min_hour": 24,
                    "bin_size_minutes": 30
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            specs.get("income"),
            Some(&BinRange::Continuous {
                first_bin_max: 0.0,
                last_bin_min: 100_000.0,
                bin_size: 10_000.0
            })
        );
        assert_eq!(
            specs.get("pickup"),
            Some(&BinRange::Time {
                first_bin_max_hour: 0,
                last_bin_min_hour: 24,
                bin_size_minutes: 30
            })
        );
    }

    #[test]
    fn rejects_unknown_bin_type() {
        assert!(parse(r#"{"x": {"bin_type": "date"}}"#).is_err());
    }

    #[test]
    fn rejects_nonpositive_bin_size() {
        assert!(parse(r#"{"x": {"first_bin_max": 0, "last_bin_min": 10, "bin_size": 0}}"#).is_err());
    }
}
