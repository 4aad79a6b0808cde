//! Free functions for reshaping records
//!
//! - [`flatten_mapping`] / [`flatten_sequence`] - collapse nesting
//! - [`deep_merge`] - recursive update
//! - [`normalize_keys`] - sanitize keys
//! - [`ensure_mapping`] / [`ensure_sequence`] - coerce loosely typed input

mod coerce;
mod flatten;
mod merge;
mod normalize;

pub use coerce::{ensure_mapping, ensure_mapping_str, ensure_sequence};
pub use flatten::{flatten_mapping, flatten_sequence};
pub use merge::deep_merge;
pub use normalize::{normalize_key, normalize_keys};
