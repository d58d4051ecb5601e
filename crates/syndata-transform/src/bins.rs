//! Bin table construction.
//!
//! Expands each [`BinRange`] into the concrete cut-point sequence the
//! encoder and decoder index into. Every sequence is bracketed by `-inf`
//! and `+inf`, so every finite value falls into some bin.

use std::collections::BTreeMap;

use syndata_model::{BinRange, BinSpecs};

/// Field name to cut points. Cut points are strictly increasing, start at
/// `-inf` and end at `+inf`; `code i` names the interval
/// `[cuts[i], cuts[i+1])`.
pub type BinTable = BTreeMap<String, Vec<f64>>;

/// Expand a bin specification into a bin table.
///
/// A degenerate range (`first_bin_max >= last_bin_min`, or an hour range
/// with no interior) produces the single catch-all bin `[-inf, +inf]`
/// rather than an error.
pub fn build_bins(specs: &BinSpecs) -> BinTable {
    let mut table = BinTable::new();
    for (field, range) in specs.iter() {
        table.insert(field.clone(), expand_range(range));
    }
    table
}

fn expand_range(range: &BinRange) -> Vec<f64> {
    let mut cuts = vec![f64::NEG_INFINITY];
    match *range {
        BinRange::Continuous {
            first_bin_max,
            last_bin_min,
            bin_size,
        } => {
            let mut cut = first_bin_max;
            while cut < last_bin_min {
                cuts.push(cut);
                cut += bin_size;
            }
        }
        BinRange::Time {
            first_bin_max_hour,
            last_bin_min_hour,
            bin_size_minutes,
        } => {
            for hour in first_bin_max_hour..last_bin_min_hour {
                for minute in (0..60).step_by(bin_size_minutes as usize) {
                    cuts.push(f64::from(hour * 100 + minute));
                }
            }
        }
    }
    cuts.push(f64::INFINITY);
    cuts
}
