//! Values held by a record

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use super::container::Record;
use crate::error::{RecordError, RecordResult};

/// A value stored in a [`Record`]
///
/// Nested mappings are always [`Field::Record`]; there is no variant for a
/// plain, unconverted mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Field {
    #[default]
    Null,
    Bool(bool),
    /// Integer or floating point number
    Number(Number),
    String(String),
    /// Ordered sequence
    List(Vec<Field>),
    /// Ordered sequence kept distinct from `List` so conversions preserve its kind
    Tuple(Vec<Field>),
    /// Nested record
    Record(Record),
}

impl Field {
    /// Name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Field::Null => "null",
            Field::Bool(_) => "boolean",
            Field::Number(_) => "number",
            Field::String(_) => "string",
            Field::List(_) => "list",
            Field::Tuple(_) => "tuple",
            Field::Record(_) => "record",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Field::Record(_))
    }

    /// True for both `List` and `Tuple`
    pub fn is_sequence(&self) -> bool {
        matches!(self, Field::List(_) | Field::Tuple(_))
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Field::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Field::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Items of a `List` or `Tuple`
    pub fn as_sequence(&self) -> Option<&[Field]> {
        match self {
            Field::List(items) | Field::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Field::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Field::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Keyed access into a nested record; `None` for non-record fields
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.as_record().and_then(|record| record.get(key))
    }

    /// Attribute-style access into a nested record
    ///
    /// Allows chains such as `record.attr("place")?.attr("name")?`. A field
    /// that does not hold a record has no attributes.
    pub fn attr(&self, name: &str) -> RecordResult<&Field> {
        match self {
            Field::Record(record) => record.attr(name),
            _ => Err(RecordError::AttributeNotFound(name.to_string())),
        }
    }

    pub fn attr_mut(&mut self, name: &str) -> RecordResult<&mut Field> {
        match self {
            Field::Record(record) => record.attr_mut(name),
            _ => Err(RecordError::AttributeNotFound(name.to_string())),
        }
    }

    /// Convert into a JSON value; both sequence kinds become arrays
    pub fn to_value(&self) -> Value {
        match self {
            Field::Null => Value::Null,
            Field::Bool(b) => Value::Bool(*b),
            Field::Number(n) => Value::Number(n.clone()),
            Field::String(s) => Value::String(s.clone()),
            Field::List(items) | Field::Tuple(items) => {
                Value::Array(items.iter().map(Field::to_value).collect())
            }
            Field::Record(record) => record.to_value(),
        }
    }
}

/// Recursive conversion: objects become records, arrays become lists
impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Null,
            Value::Bool(b) => Field::Bool(b),
            Value::Number(n) => Field::Number(n),
            Value::String(s) => Field::String(s),
            Value::Array(items) => Field::List(items.into_iter().map(Field::from).collect()),
            Value::Object(map) => Field::Record(Record::from_map(map)),
        }
    }
}

impl From<Field> for Value {
    fn from(field: Field) -> Self {
        match field {
            Field::Null => Value::Null,
            Field::Bool(b) => Value::Bool(b),
            Field::Number(n) => Value::Number(n),
            Field::String(s) => Value::String(s),
            Field::List(items) | Field::Tuple(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            Field::Record(record) => record.into(),
        }
    }
}

impl From<Record> for Field {
    fn from(record: Record) -> Self {
        Field::Record(record)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::String(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::String(s)
    }
}

impl From<bool> for Field {
    fn from(b: bool) -> Self {
        Field::Bool(b)
    }
}

impl From<i32> for Field {
    fn from(n: i32) -> Self {
        Field::Number(n.into())
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Number(n.into())
    }
}

impl From<u64> for Field {
    fn from(n: u64) -> Self {
        Field::Number(n.into())
    }
}

/// Non-finite floats become `Null`, as in `serde_json`
impl From<f64> for Field {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Field::Null, Field::Number)
    }
}

impl<T: Into<Field>> From<Vec<T>> for Field {
    fn from(items: Vec<T>) -> Self {
        Field::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Null, Into::into)
    }
}

impl PartialEq<Value> for Field {
    fn eq(&self, other: &Value) -> bool {
        self.to_value() == *other
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Null => serializer.serialize_unit(),
            Field::Bool(b) => serializer.serialize_bool(*b),
            Field::Number(n) => n.serialize(serializer),
            Field::String(s) => serializer.serialize_str(s),
            Field::List(items) | Field::Tuple(items) => items.serialize(serializer),
            Field::Record(record) => record.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Field::from)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_objects_become_records() {
        let field = Field::from(json!({"a": {"b": [{"c": 1}, 2]}}));

        let a = field.get("a").unwrap();
        assert!(a.is_record());

        let items = a.get("b").and_then(Field::as_sequence).unwrap();
        assert!(items[0].is_record());
        assert_eq!(items[1], Field::from(2));
    }

    #[test]
    fn test_attr_on_scalar_fails() {
        let field = Field::from("Belgium");
        assert_eq!(
            field.attr("name"),
            Err(RecordError::AttributeNotFound("name".to_string()))
        );
    }

    #[test]
    fn test_tuple_serializes_as_array() {
        let field = Field::Tuple(vec![Field::from(1), Field::from("x")]);
        assert_eq!(serde_json::to_value(&field).unwrap(), json!([1, "x"]));
        assert_eq!(field, json!([1, "x"]));
    }

    #[test]
    fn test_number_kinds_preserved() {
        let field = Field::from(json!({"int": 3, "float": 4.66092}));
        assert_eq!(field.get("int").and_then(Field::as_i64), Some(3));
        assert_eq!(field.get("float").and_then(Field::as_f64), Some(4.66092));
        assert_eq!(Field::from(f64::NAN), Field::Null);
    }

    #[test]
    fn test_deserialize_and_display() {
        let field: Field = serde_json::from_str(r#"{"lang": {"label": "en"}}"#).unwrap();
        assert!(field.get("lang").unwrap().is_record());
        assert_eq!(field.to_string(), r#"{"lang":{"label":"en"}}"#);
    }
}
