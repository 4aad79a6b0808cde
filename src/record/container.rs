//! The attribute-accessible nested record

use std::fmt;
use std::ops::{Index, IndexMut};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::config::LookupOptions;
use super::field::Field;
use crate::error::{RecordError, RecordResult};
use crate::transform::{deep_merge, flatten_mapping};

/// Separator used by [`Record::flatten`] when callers have no preference
pub const DEFAULT_SEPARATOR: &str = "_";

/// Insertion-ordered mapping whose entries are reachable both by key and as
/// attributes.
///
/// Keyed access (`get_key`, `Index`) and attribute access (`attr`,
/// `set_attr`) read and write the same storage, so a write through one is
/// immediately visible through the other. They differ only in the error
/// reported for an absent key: [`RecordError::KeyNotFound`] versus
/// [`RecordError::AttributeNotFound`].
///
/// Every nested mapping is itself a `Record`, including mappings inside
/// lists. Nesting depth is bounded only by the stack; very deep inputs are
/// not guarded against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub(crate) entries: IndexMap<String, Field>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON value, which must be an object
    pub fn from_value(value: Value) -> RecordResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(RecordError::type_mismatch("mapping", json_type_name(&other))),
        }
    }

    /// Build a record from a JSON object, converting nested objects recursively
    pub fn from_map(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key, Field::from(value)))
            .collect()
    }

    /// Parse JSON text into a record
    pub fn from_json(json: &str) -> RecordResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Field> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Field> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.entries.get_mut(key)
    }

    /// Keyed access; an absent key is a [`RecordError::KeyNotFound`]
    pub fn get_key(&self, key: &str) -> RecordResult<&Field> {
        self.entries
            .get(key)
            .ok_or_else(|| RecordError::KeyNotFound(key.to_string()))
    }

    pub fn get_key_mut(&mut self, key: &str) -> RecordResult<&mut Field> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| RecordError::KeyNotFound(key.to_string()))
    }

    /// Attribute access; an absent key is a [`RecordError::AttributeNotFound`]
    pub fn attr(&self, name: &str) -> RecordResult<&Field> {
        self.entries
            .get(name)
            .ok_or_else(|| RecordError::AttributeNotFound(name.to_string()))
    }

    pub fn attr_mut(&mut self, name: &str) -> RecordResult<&mut Field> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| RecordError::AttributeNotFound(name.to_string()))
    }

    /// Insert or replace a value, returning the previous one
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Field>) -> Option<Field> {
        self.entries.insert(key.into(), value.into())
    }

    /// Attribute-style assignment; same storage as [`Record::insert`]
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Field>) -> Option<Field> {
        self.insert(name, value)
    }

    /// Remove a key, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<Field> {
        self.entries.shift_remove(key)
    }

    /// Remove top-level keys in place
    ///
    /// Fails with [`RecordError::KeyNotFound`] for the first absent key, in
    /// which case nothing is removed.
    pub fn exclude<I>(&mut self, keys: I) -> RecordResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keys: Vec<I::Item> = keys.into_iter().collect();
        if let Some(missing) = keys
            .iter()
            .map(|key| key.as_ref())
            .find(|key| !self.contains_key(key))
        {
            return Err(RecordError::KeyNotFound(missing.to_string()));
        }

        for key in &keys {
            self.entries.shift_remove(key.as_ref());
        }
        tracing::debug!(removed = keys.len(), remaining = self.len(), "Excluded keys");
        Ok(self)
    }

    /// Return the first value found along `paths` that differs from the default
    ///
    /// Paths are tried left to right. A path that cannot be resolved (absent
    /// key, or an intermediate value that is not a record) counts as the
    /// default. Never fails: when nothing resolves, `options.default` is
    /// returned.
    pub fn lookup<I>(&self, paths: I, options: &LookupOptions) -> Field
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for path in paths {
            if let Some(value) = self.resolve_path(path.as_ref(), &options.delimiter) {
                if *value != options.default {
                    return value.clone();
                }
            }
        }
        options.default.clone()
    }

    /// Resolve a single `.`-delimited path
    pub fn lookup_path(&self, path: &str) -> Option<&Field> {
        self.resolve_path(path, ".")
    }

    fn resolve_path(&self, path: &str, delimiter: &str) -> Option<&Field> {
        // An empty delimiter cannot split anything
        if delimiter.is_empty() {
            return self.get(path);
        }

        let mut segments = path.split(delimiter);
        let first = segments.next()?;
        let mut current = self.get(first)?;
        for segment in segments {
            current = current.as_record()?.get(segment)?;
        }
        Some(current)
    }

    /// Collapse nested records into leaf paths joined by `separator`
    ///
    /// Destructive: the previous nested keys no longer exist afterwards.
    /// Lists and tuples are leaves and are kept whole.
    pub fn flatten(&mut self, separator: &str) -> &mut Self {
        let flat = flatten_mapping(self, separator);
        tracing::debug!(
            before = self.len(),
            after = flat.len(),
            separator,
            "Flattened record"
        );
        self.entries = flat.entries;
        self
    }

    /// Deep-merge `other` into this record
    ///
    /// Non-empty nested records are merged key by key; every other incoming
    /// value (including an empty record) replaces what was there.
    pub fn update(&mut self, other: Record) -> &mut Self {
        tracing::trace!(incoming = other.len(), "Updating record");
        deep_merge(self, other)
    }

    /// Convert into a JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(
            record
                .entries
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> RecordResult<Self> {
        Self::from_value(value)
    }
}

impl TryFrom<Field> for Record {
    type Error = RecordError;

    fn try_from(field: Field) -> RecordResult<Self> {
        match field {
            Field::Record(record) => Ok(record),
            other => Err(RecordError::type_mismatch("mapping", other.type_name())),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Field>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Field>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Field);
    type IntoIter = indexmap::map::IntoIter<String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Field);
    type IntoIter = indexmap::map::Iter<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Panics if the key is absent; use [`Record::get_key`] to get an error instead.
impl Index<&str> for Record {
    type Output = Field;

    fn index(&self, key: &str) -> &Field {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("key not found in record: {key}"),
        }
    }
}

impl IndexMut<&str> for Record {
    fn index_mut(&mut self, key: &str) -> &mut Field {
        match self.entries.get_mut(key) {
            Some(value) => value,
            None => panic!("key not found in record: {key}"),
        }
    }
}

impl PartialEq<Value> for Record {
    fn eq(&self, other: &Value) -> bool {
        self.to_value() == *other
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Record {
        Record::from_value(json!({
            "name": "Report Summaries Departement",
            "lang": {"label": "en", "name": "English"},
            "place": {
                "id": "85632997",
                "belongsto": ["Europe"],
                "location": {"lon": 4.66092, "lat": 50.640991}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_non_object_is_type_mismatch() {
        let err = Record::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            RecordError::TypeMismatch {
                expected: "mapping".to_string(),
                found: "array".to_string(),
            }
        );
    }

    #[test]
    fn test_keyed_and_attr_share_storage() {
        let mut record = sample();
        record.set_attr("name", "Ministry of Silly Walks");
        assert_eq!(record["name"], Field::from("Ministry of Silly Walks"));

        *record.get_key_mut("name").unwrap() = Field::from("Flat Earth Society");
        assert_eq!(record.attr("name").unwrap(), &Field::from("Flat Earth Society"));

        record["lang"] = Field::from(5);
        assert_eq!(record.attr("lang").unwrap().as_i64(), Some(5));
    }

    #[test]
    fn test_missing_key_error_kinds_differ() {
        let record = sample();
        assert!(matches!(record.get_key("gpe"), Err(RecordError::KeyNotFound(_))));
        assert!(matches!(record.attr("gpe"), Err(RecordError::AttributeNotFound(_))));
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_panics_on_missing_key() {
        let record = sample();
        let _ = &record["missing"];
    }

    #[test]
    fn test_exclude_is_all_or_nothing() {
        let mut record = sample();
        let err = record.exclude(["name", "missing"]).unwrap_err();
        assert_eq!(err, RecordError::KeyNotFound("missing".to_string()));
        assert_eq!(record.len(), 3);

        record.exclude(["name", "lang"]).unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["place"]);
    }

    #[test]
    fn test_lookup_skips_values_equal_to_default() {
        let record = Record::from_value(json!({"a": "x", "b": "y"})).unwrap();
        let opts = LookupOptions::new().with_default("x");
        assert_eq!(record.lookup(["a", "b"], &opts), Field::from("y"));
        assert_eq!(record.lookup(["a"], &opts), Field::from("x"));
    }

    #[test]
    fn test_lookup_through_non_record_yields_default() {
        let record = sample();
        let opts = LookupOptions::default();
        assert_eq!(record.lookup(["name.first"], &opts), Field::Null);
        assert_eq!(record.lookup(["place.belongsto.0"], &opts), Field::Null);
        assert_eq!(record.lookup(Vec::<&str>::new(), &opts), Field::Null);
    }

    #[test]
    fn test_empty_delimiter_is_whole_key() {
        let mut record = Record::new();
        record.insert("a.b", 1);
        let opts = LookupOptions::new().with_delimiter("");
        assert_eq!(record.lookup(["a.b"], &opts), Field::from(1));
    }

    #[test]
    fn test_display_keeps_insertion_order() {
        let record: Record = [("z", 1), ("a", 2)].into_iter().collect();
        assert_eq!(record.to_string(), r#"{"z":1,"a":2}"#);
    }
}
