//! Flattening of nested records and sequences

use crate::record::{Field, Record};

/// Collapse nested records into a single level keyed by leaf paths
///
/// Child keys are prefixed with `parent + separator`. Lists and tuples are
/// leaves and are copied whole. An empty parent key adds no prefix. If two
/// paths produce the same key, the later value wins and the key keeps the
/// position of its first occurrence.
pub fn flatten_mapping(record: &Record, separator: &str) -> Record {
    let mut flat = Record::new();
    flatten_into(record, "", separator, &mut flat);
    flat
}

fn flatten_into(record: &Record, parent_key: &str, separator: &str, out: &mut Record) {
    for (key, value) in record {
        let new_key = if parent_key.is_empty() {
            key.clone()
        } else {
            format!("{parent_key}{separator}{key}")
        };

        match value {
            Field::Record(nested) => flatten_into(nested, &new_key, separator, out),
            leaf => {
                out.insert(new_key, leaf.clone());
            }
        }
    }
}

/// Expand nested lists and tuples into one flat list
///
/// Depth-first, left to right. Non-sequence items, records included, pass
/// through unchanged.
pub fn flatten_sequence<I>(items: I) -> Vec<Field>
where
    I: IntoIterator<Item = Field>,
{
    let mut flat = Vec::new();
    for item in items {
        match item {
            Field::List(nested) | Field::Tuple(nested) => flat.extend(flatten_sequence(nested)),
            other => flat.push(other),
        }
    }
    flat
}
