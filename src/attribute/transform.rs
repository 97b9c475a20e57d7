// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transforms from raw device attribute values to displayable values.
//!
//! A handful of attributes need conversion before display: the tank
//! temperature arrives in Fahrenheit, the water pressure as a hex string in
//! tenths of a bar, and the weekly schedules in the 24-character wire
//! format. Every other attribute passes through unchanged.
//!
//! The mapping from key to rule is a single closed table
//! ([`Transform::for_key`]) rather than string matching scattered across
//! call sites.

use std::fmt;

use serde_json::Value;

use crate::error::TransformError;
use crate::types::WeekSchedule;

/// A value ready for display to a user.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DisplayValue {
    /// A numeric reading.
    Number(f64),
    /// A textual value.
    Text(String),
    /// A boolean flag.
    Bool(bool),
}

impl DisplayValue {
    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) | Self::Bool(_) => None,
        }
    }

    /// Returns the text value, if this is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) | Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A conversion rule applied when surfacing a raw attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Raw value is Fahrenheit; display Celsius.
    FahrenheitToCelsius,
    /// Raw value is a hex string in tenths of a bar; display bar.
    HexTenthsToBar,
    /// Raw value is a 24-character wire schedule; display the slot list.
    WeeklySchedule,
    /// No conversion.
    Passthrough,
}

impl Transform {
    /// Returns the transform rule for an attribute key.
    ///
    /// # Examples
    ///
    /// ```
    /// use vailr_lib::attribute::Transform;
    ///
    /// assert_eq!(Transform::for_key("Tank_temperature"), Transform::FahrenheitToCelsius);
    /// assert_eq!(Transform::for_key("reserved_data1"), Transform::HexTenthsToBar);
    /// assert_eq!(Transform::for_key("Start_Time_CH3"), Transform::WeeklySchedule);
    /// assert_eq!(Transform::for_key("Room_Temperature"), Transform::Passthrough);
    /// ```
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        match key {
            "Tank_temperature" => Self::FahrenheitToCelsius,
            "reserved_data1" => Self::HexTenthsToBar,
            k if k.starts_with("Start_Time_") => Self::WeeklySchedule,
            _ => Self::Passthrough,
        }
    }

    /// Applies the transform to a raw attribute value.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformError`] when the raw value does not have the
    /// shape the rule expects. The failure affects only the one attribute;
    /// callers surface it as "value unavailable".
    pub fn apply(self, key: &str, raw: &Value) -> Result<DisplayValue, TransformError> {
        match self {
            Self::FahrenheitToCelsius => {
                let fahrenheit = raw.as_f64().ok_or_else(|| TransformError::NotNumeric {
                    key: key.to_string(),
                    raw: raw.to_string(),
                })?;
                Ok(DisplayValue::Number((fahrenheit - 32.0) * 5.0 / 9.0))
            }
            Self::HexTenthsToBar => {
                let text = raw.as_str().ok_or_else(|| TransformError::NotText {
                    key: key.to_string(),
                    raw: raw.to_string(),
                })?;
                let tenths = u32::from_str_radix(text.trim(), 16).map_err(|_| {
                    TransformError::InvalidHex {
                        key: key.to_string(),
                        raw: text.to_string(),
                    }
                })?;
                Ok(DisplayValue::Number(f64::from(tenths) / 10.0))
            }
            Self::WeeklySchedule => {
                let text = raw.as_str().ok_or_else(|| TransformError::NotText {
                    key: key.to_string(),
                    raw: raw.to_string(),
                })?;
                let schedule = WeekSchedule::from_wire(text).map_err(|source| {
                    TransformError::InvalidSchedule {
                        key: key.to_string(),
                        source,
                    }
                })?;
                Ok(DisplayValue::Text(schedule.to_string()))
            }
            Self::Passthrough => Ok(passthrough(raw)),
        }
    }
}

/// Carries a raw JSON value through unchanged.
fn passthrough(raw: &Value) -> DisplayValue {
    match raw {
        Value::Number(n) => n.as_f64().map_or_else(
            || DisplayValue::Text(n.to_string()),
            DisplayValue::Number,
        ),
        Value::String(s) => DisplayValue::Text(s.clone()),
        Value::Bool(b) => DisplayValue::Bool(*b),
        other => DisplayValue::Text(other.to_string()),
    }
}
