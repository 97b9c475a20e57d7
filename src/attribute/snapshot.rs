// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot of the device's reported attribute map.

use std::collections::HashMap;

use serde_json::Value;

/// One state snapshot from the device: attribute key to raw value.
///
/// The external device connection refreshes this mapping periodically; the
/// library only reads it. A JSON `null` counts as "not reported" — lookups
/// treat it the same as an absent key.
///
/// # Examples
///
/// ```
/// use vailr_lib::attribute::AttributeSnapshot;
///
/// let snapshot: AttributeSnapshot = serde_json::from_str(
///     r#"{"Tank_temperature": 100, "Brand": "vaillant"}"#
/// ).unwrap();
///
/// assert!(snapshot.contains("Tank_temperature"));
/// assert!(!snapshot.contains("reserved_data1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AttributeSnapshot {
    attrs: HashMap<String, Value>,
}

impl AttributeSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value for a key.
    ///
    /// Returns `None` for absent keys and for JSON `null` values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key).filter(|v| !v.is_null())
    }

    /// Returns `true` if the key is present with a non-null value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the reported attribute keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    /// Inserts or replaces a raw attribute value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.attrs.insert(key.into(), value);
    }

    /// Returns the number of reported attributes, including null ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl From<HashMap<String, Value>> for AttributeSnapshot {
    fn from(attrs: HashMap<String, Value>) -> Self {
        Self { attrs }
    }
}

impl FromIterator<(String, Value)> for AttributeSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}
