//! Record Dict - nested records with attribute-style access
//!
//! Provides:
//! - [`Record`], a mapping whose entries are reachable by key and as attributes
//! - Dotted-path lookup, destructive flattening and deep-merge update
//! - Conversion of lists of mappings into keyed or aggregated records
//! - Free functions for flattening, merging, key normalization and coercion
//!
//! Every operation is synchronous and works on in-memory values owned by the
//! caller.

pub mod error;
pub mod record;
pub mod transform;

// Re-export commonly used types
pub use error::{RecordError, RecordResult};
pub use record::{
    DEFAULT_SEPARATOR, Field, LookupOptions, NormalizeOptions, Objectified, Record, objectify,
};
pub use transform::{
    deep_merge, ensure_mapping, ensure_mapping_str, ensure_sequence, flatten_mapping,
    flatten_sequence, normalize_key, normalize_keys,
};
