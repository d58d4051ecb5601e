//! Schema-driven discretization for tabular records.
//!
//! This crate converts raw tables (numeric, categorical, or null-able
//! values) to and from small non-negative integer codes, the shape that
//! marginal-distribution scoring expects:
//!
//! - **bins**: expand a bin specification into ±inf-bracketed cut points
//! - **encode** / **decode**: the discretize / undo-discretize pair
//! - **filter**: row selection by allowed-value sets
//! - **reshape**: long/wide pivoting of per-individual period records
//! - **numeric**: suppressed-record cleanup and numeric coercion

pub mod bins;
pub mod decode;
mod dispatch;
pub mod encode;
pub mod filter;
pub mod numeric;
pub mod reshape;

// Re-export the operation surface
pub use bins::{BinTable, build_bins};
pub use decode::{DecodeOptions, decode, decode_in_place};
pub use encode::{encode, encode_in_place};
pub use filter::{RowConstraint, filter_rows};
pub use numeric::drop_non_numeric;
pub use reshape::{stack, unstack};
