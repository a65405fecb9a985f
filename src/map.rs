//! Ordered field map for object values.
//!
//! [`FieldMap`] wraps an [`IndexMap`] so object fields keep their insertion
//! order, which keeps `Debug` output and iteration deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use audio_format::{FieldMap, Value};
//!
//! let mut fields = FieldMap::new();
//! fields.insert("channels".to_string(), Value::from(2));
//! fields.insert("sampleRate".to_string(), Value::from(44100));
//!
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields.get("channels").and_then(|v| v.as_i64()), Some(2));
//! ```

use indexmap::IndexMap;

/// An ordered map of field names to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldMap(IndexMap<String, crate::Value>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field. If the field was already present, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use audio_format::{FieldMap, Value};
    ///
    /// let mut fields = FieldMap::new();
    /// assert!(fields.insert("rate".to_string(), Value::from(8000)).is_none());
    /// assert!(fields.insert("rate".to_string(), Value::from(16000)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value of a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the field is present, whatever its value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the fields, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Value)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        FieldMap(IndexMap::from_iter(iter))
    }
}
