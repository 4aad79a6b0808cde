//! Conversions from lists of mappings into records

use indexmap::IndexMap;
use serde_json::Value;

use super::container::{Record, json_type_name};
use super::field::Field;
use crate::error::{RecordError, RecordResult};

impl Record {
    /// Build a record keyed by `key_field`, holding each element's `val_field`
    ///
    /// Elements may be JSON objects or records. Nested mappings in the values
    /// are converted to records. When a key repeats, the later element
    /// overwrites the earlier one.
    ///
    /// ```rust,ignore
    /// let consorts = Record::from_record_list(&items, "element", "consort")?;
    /// assert_eq!(consorts.attr("agni")?.attr("id")?, &Field::from("Swaha"));
    /// ```
    pub fn from_record_list<I>(records: I, key_field: &str, val_field: &str) -> RecordResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        let mut result = Record::new();
        for (index, item) in records.into_iter().enumerate() {
            let (key, value) = split_entry(item.into(), index, key_field, val_field)?;
            if result.contains_key(&key) {
                tracing::debug!(key = %key, index, "Repeated key, overwriting earlier value");
            }
            result.insert(key, value);
        }
        Ok(result)
    }

    /// Like [`Record::from_record_list`], but gathers the values of a repeated
    /// key into a list, in input order
    pub fn from_record_list_aggregate<I>(
        records: I,
        key_field: &str,
        val_field: &str,
    ) -> RecordResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        let mut groups: IndexMap<String, Vec<Field>> = IndexMap::new();
        for (index, item) in records.into_iter().enumerate() {
            let (key, value) = split_entry(item.into(), index, key_field, val_field)?;
            groups.entry(key).or_default().push(value);
        }

        tracing::debug!(groups = groups.len(), "Aggregated record list");
        Ok(groups
            .into_iter()
            .map(|(key, values)| (key, Field::List(values)))
            .collect())
    }
}

/// Extract the key and value of one list element
fn split_entry(
    item: Field,
    index: usize,
    key_field: &str,
    val_field: &str,
) -> RecordResult<(String, Field)> {
    let mut record = Record::try_from(item)?;

    let key = match record.get(key_field) {
        Some(field) => key_string(field)?,
        None => {
            return Err(RecordError::FieldMissing {
                field: key_field.to_string(),
                index,
            });
        }
    };

    let value = if key_field == val_field {
        record.get(val_field).cloned()
    } else {
        record.remove(val_field)
    };
    let value = value.ok_or_else(|| RecordError::FieldMissing {
        field: val_field.to_string(),
        index,
    })?;

    Ok((key, value))
}

/// Keys must be scalars; numbers and booleans use their JSON text
fn key_string(field: &Field) -> RecordResult<String> {
    match field {
        Field::String(s) => Ok(s.clone()),
        Field::Number(n) => Ok(n.to_string()),
        Field::Bool(b) => Ok(b.to_string()),
        other => Err(RecordError::type_mismatch("scalar key", other.type_name())),
    }
}

/// Result of [`objectify`]
#[derive(Debug, Clone, PartialEq)]
pub enum Objectified {
    /// An object became a single record
    Record(Record),
    /// An array of objects became a list of records
    Records(Vec<Record>),
    /// Anything else, converted as a plain field
    Other(Field),
}

/// Convert a JSON result into records
///
/// Objects become a [`Record`]; arrays become a list of records and every
/// element must be an object. Other values pass through as fields.
pub fn objectify(value: Value) -> RecordResult<Objectified> {
    match value {
        Value::Object(map) => Ok(Objectified::Record(Record::from_map(map))),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(Record::from_map(map)),
                other => Err(RecordError::type_mismatch("mapping", json_type_name(&other))),
            })
            .collect::<RecordResult<Vec<_>>>()
            .map(Objectified::Records),
        other => Ok(Objectified::Other(Field::from(other))),
    }
}
