//! Deep merge of records

use crate::record::{Field, Record};

/// Merge `overrides` into `target` in place and return `target`
///
/// A non-empty incoming record is merged key by key into the value already
/// at that key, so keys it does not mention survive. When the existing value
/// is missing or not a record, the merge starts from an empty record. Any
/// other incoming value, an empty record included, replaces the existing
/// one outright.
pub fn deep_merge(target: &mut Record, overrides: Record) -> &mut Record {
    for (key, value) in overrides {
        match value {
            Field::Record(incoming) if !incoming.is_empty() => {
                let slot = target
                    .entries
                    .entry(key)
                    .or_insert_with(|| Field::Record(Record::new()));
                if !slot.is_record() {
                    *slot = Field::Record(Record::new());
                }
                if let Field::Record(existing) = slot {
                    deep_merge(existing, incoming);
                }
            }
            other => {
                target.entries.insert(key, other);
            }
        }
    }
    target
}
