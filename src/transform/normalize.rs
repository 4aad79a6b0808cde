//! Key normalization

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::record::{Field, NormalizeOptions, Record};

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Normalize a single key
pub fn normalize_key(key: &str, options: &NormalizeOptions) -> String {
    let replaced = NON_ALPHANUMERIC.replace_all(key, NoExpand(&options.separator));
    if options.lowercase {
        replaced.to_lowercase()
    } else {
        replaced.into_owned()
    }
}

/// Return a copy of `record` with every key normalized
///
/// Each run of characters outside `A-Za-z0-9` becomes `options.separator`,
/// then the key is lowercased if requested. Nested records are normalized
/// too; records inside lists are left as they are. Keys that collide after
/// normalization keep the later value.
pub fn normalize_keys(record: &Record, options: &NormalizeOptions) -> Record {
    record
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Field::Record(nested) => Field::Record(normalize_keys(nested, options)),
                other => other.clone(),
            };
            (normalize_key(key, options), value)
        })
        .collect()
}
