//! The persisted record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named field value: a string or an ordered list of strings.
///
/// Asset-location lists keep insertion order (insertion order is display
/// order) and removal is by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single string value (summary text, prompt, author name)
    Text(String),
    /// An ordered list of strings (asset locations)
    List(Vec<String>),
}

impl FieldValue {
    /// Borrow the string value, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    /// Borrow the list value, if this is a list field.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Named fields of a record.
pub type Fields = BTreeMap<String, FieldValue>;

/// The persisted unit of the artifact store.
///
/// One record accumulates the named sub-artifacts of a subject: `content`,
/// `img_url`, `chapter_1`, `Prompt_Cover`, and so on. The key is unique
/// within its collection; the field map grows across update calls.
///
/// # Examples
///
/// ```
/// use thirdbrain_store::ArtifactRecord;
///
/// let record = ArtifactRecord::new("Deep Work by Cal Newport")
///     .with_field("author", "Cal Newport")
///     .with_field("content", "Introduction: ...")
///     .with_field("img_url", vec!["vault://ab12/cover_dalle_0.png".to_string()]);
///
/// assert_eq!(record.text("author"), Some("Cal Newport"));
/// assert_eq!(record.list("img_url").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Unique key within the collection (title or id)
    pub key: String,
    /// Named fields, merged across updates
    #[serde(default)]
    pub fields: Fields,
    /// Creation timestamp, set once on first insert
    pub created_at: DateTime<Utc>,
}

impl ArtifactRecord {
    /// Create an empty record keyed by `key`, stamped now.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: Fields::new(),
            created_at: Utc::now(),
        }
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set or replace one field.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// The string value of a field, when present and textual.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_text)
    }

    /// The list value of a field, when present and a list.
    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).and_then(FieldValue::as_list)
    }

    /// Merge `updates` into this record.
    ///
    /// Field-level: named fields are replaced, everything else is left
    /// untouched. This is the only mutation the store applies on `update`.
    pub fn merge(&mut self, updates: Fields) {
        for (name, value) in updates {
            self.fields.insert(name, value);
        }
    }

    /// Field names starting with `prefix`, in sorted order.
    pub fn field_names_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.fields
            .keys()
            .filter(move |name| name.starts_with(prefix))
            .map(String::as_str)
    }
}
