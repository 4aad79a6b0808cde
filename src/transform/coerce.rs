//! Coercion of fields into records and sequences

use crate::error::{RecordError, RecordResult};
use crate::record::{DEFAULT_SEPARATOR, Field, Record};

use super::flatten::{flatten_mapping, flatten_sequence};

/// Coerce a field into a record
///
/// Text is parsed as JSON and must hold an object; a record is returned as
/// it is. Anything else is a [`RecordError::TypeMismatch`].
pub fn ensure_mapping(field: Field) -> RecordResult<Record> {
    match field {
        Field::String(text) => ensure_mapping_str(&text),
        Field::Record(record) => Ok(record),
        other => Err(RecordError::type_mismatch(
            "string or mapping",
            other.type_name(),
        )),
    }
}

/// Parse JSON text into a record
pub fn ensure_mapping_str(text: &str) -> RecordResult<Record> {
    Record::from_json(text)
}

/// Coerce a field into a list of fields
///
/// Lists and tuples give back their items. A record is flattened with `_`
/// and laid out as `[key, value, key, value, ...]`, with list values spliced
/// in. Any other field becomes a one-element list.
pub fn ensure_sequence(field: Field) -> Vec<Field> {
    match field {
        Field::List(items) | Field::Tuple(items) => items,
        Field::Record(record) => {
            let pairs = flatten_mapping(&record, DEFAULT_SEPARATOR)
                .into_iter()
                .map(|(key, value)| Field::List(vec![Field::String(key), value]));
            flatten_sequence(pairs)
        }
        other => vec![other],
    }
}
