//! # Compound Records
//!
//! A [`Record`] is one compound as produced by the ingestion job: an integer id,
//! a loosely-schematized mapping of hand-authored field names to scalar values,
//! and an opaque base64 image payload.
//!
//! Field values are modelled as the closed sum type [`FieldValue`] so that
//! stringification and numeric extraction are total functions. The empty string
//! used by the source data as a "no value" sentinel is the explicit
//! [`FieldValue::Empty`] variant.
//!
//! [`Fields`] keeps the source key order; flexible field matching walks the
//! mapping in that order, so the order is part of the observable behaviour.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

/// Scalar value of a single record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Non-empty text, stored verbatim.
    Text(String),
    /// Numeric value; integers stay integers so they render back unchanged.
    Number(serde_json::Number),
    /// No value (the source's empty string or `null`).
    Empty,
}

impl FieldValue {
    /// Build a text value, mapping the empty string to [`FieldValue::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// Build a floating-point value. Non-finite input has no JSON form and becomes `Empty`.
    #[must_use]
    pub fn float(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(Self::Empty, Self::Number)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The numeric payload of a `Number` value. Text is not parsed here.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            Self::Text(_) | Self::Empty => None,
        }
    }

    /// Stringified form used by every text predicate.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(number) => number.serialize(serializer),
            Self::Empty => serializer.serialize_str(""),
        }
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null field value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<FieldValue, E> {
        Ok(FieldValue::text(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<FieldValue, E> {
        Ok(FieldValue::text(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<FieldValue, E> {
        Ok(FieldValue::Number(value.into()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<FieldValue, E> {
        Ok(FieldValue::Number(value.into()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<FieldValue, E> {
        Ok(FieldValue::float(value))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(value.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FieldValue, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

/// Field mapping of a record, in source order.
///
/// Inserting an existing key replaces its value in place, so a key keeps the
/// position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(IndexMap<String, FieldValue>);

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under exactly `name` (no normalization).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// One compound entry of the catalog.
///
/// The ingestion job historically wrote `mol_idx` and `base64_png`; both are
/// accepted on load and written back as `id` and `image`. When a record
/// carries both spellings, `id` and `image` win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "StoredRecord")]
pub struct Record {
    pub id: i64,
    /// Field name to scalar value, in source order.
    #[schema(value_type = Object)]
    pub fields: Fields,
    /// Base64-encoded PNG rendering of the molecule.
    pub image: Option<String>,
}

/// On-disk shape of a record, current and legacy key names side by side.
#[derive(Deserialize)]
struct StoredRecord {
    id: Option<i64>,
    mol_idx: Option<i64>,
    #[serde(default)]
    fields: Fields,
    image: Option<String>,
    base64_png: Option<String>,
}

impl TryFrom<StoredRecord> for Record {
    type Error = String;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let id = stored
            .id
            .or(stored.mol_idx)
            .ok_or_else(|| "missing field `id`".to_string())?;
        Ok(Self {
            id,
            fields: stored.fields,
            image: stored.image.or(stored.base64_png),
        })
    }
}

impl Record {
    pub fn new(id: i64, fields: Fields) -> Self {
        Self {
            id,
            fields,
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
