use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single cell of an extracted row.
///
/// Extraction hands over values as text or as numbers interchangeably, so the
/// variants mirror what a flat JSON object can carry. Absence is modelled
/// outside this type (`Option<FieldValue>` / missing key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// One extracted row, keyed by field name.
///
/// A key mapped to `None` is a present-but-null field; reads treat it the same
/// as a missing key, but it is kept as-is. Fields keep their insertion order and
/// overwrites stay in place, so untouched rows serialize back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Option<FieldValue>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, with null and missing both reported as `None`.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key).and_then(Option::as_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(key.into(), Some(value.into())).flatten()
    }

    pub fn insert_null(&mut self, key: impl Into<String>) -> Option<FieldValue> {
        self.fields.insert(key.into(), None).flatten()
    }

    /// Removes `key`, shifting later fields down to keep their order.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.shift_remove(key).flatten()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(k, v)| (k.into(), Some(v.into())))
            .collect();
        Record { fields }
    }
}

/// Per-invocation flags supplied by the upstream document classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowContext {
    #[serde(default)]
    pub form_type: Option<String>,
    #[serde(default)]
    pub upload_channel: Option<String>,
}

impl RowContext {
    pub fn new(form_type: Option<&str>, upload_channel: Option<&str>) -> Self {
        RowContext {
            form_type: form_type.map(str::to_string),
            upload_channel: upload_channel.map(str::to_string),
        }
    }
}

/// Outcome of lenient numeric parsing. `Parsed` always holds a finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    Parsed(f64),
    Unparseable,
}

impl ParsedNumber {
    pub fn value(self) -> Option<f64> {
        match self {
            ParsedNumber::Parsed(v) => Some(v),
            ParsedNumber::Unparseable => None,
        }
    }

    pub fn is_parsed(self) -> bool {
        matches!(self, ParsedNumber::Parsed(_))
    }
}
