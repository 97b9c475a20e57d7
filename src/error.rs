// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `VailR` library.
//!
//! This module provides a comprehensive error hierarchy for handling failures
//! across the library: value validation, schedule-text parsing, attribute
//! transforms, and device control operations.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when decoding
/// boiler attributes or submitting schedule updates.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing a schedule string.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while transforming a raw attribute value.
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// Error occurred during a device control operation.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// A weekly schedule holds more slots than the device supports.
    #[error("schedule has {0} slots, device supports at most 3")]
    TooManySlots(usize),
}

/// Errors related to parsing user-entered schedule text.
///
/// A schedule string is a comma-separated list of `HH:MM-HH:MM` ranges.
/// Any parse failure rejects the whole input; nothing is partially applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A time-range segment has no `-` between start and end.
    #[error("invalid time slot (missing '-'): {0}")]
    MissingRangeSeparator(String),

    /// A start or end time has no `:` between hour and minute.
    #[error("invalid time format (missing ':'): {0}")]
    MissingTimeSeparator(String),

    /// An hour or minute field is not a decimal number.
    #[error("invalid number in time slot {segment}: {field}")]
    InvalidNumber {
        /// The segment that failed to parse.
        segment: String,
        /// The offending hour/minute field.
        field: String,
    },

    /// An hour or minute is outside its valid range.
    #[error("time values out of range: {0}")]
    TimeOutOfRange(String),

    /// A wire-format schedule string is not exactly 24 characters.
    #[error("schedule wire value must be 24 hex characters, got {0}")]
    WrongWireLength(usize),
}

/// Errors related to transforming raw device attribute values.
///
/// A failed transform makes the single affected attribute unavailable;
/// sibling attributes are unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A numeric transform received a non-numeric raw value.
    #[error("expected a numeric value for {key}, got {raw}")]
    NotNumeric {
        /// The attribute key being transformed.
        key: String,
        /// Rendering of the raw value that was received.
        raw: String,
    },

    /// A text transform received a non-string raw value.
    #[error("expected a text value for {key}, got {raw}")]
    NotText {
        /// The attribute key being transformed.
        key: String,
        /// Rendering of the raw value that was received.
        raw: String,
    },

    /// A hex-encoded field could not be parsed as base-16.
    #[error("invalid hex value for {key}: {raw}")]
    InvalidHex {
        /// The attribute key being transformed.
        key: String,
        /// The raw string that failed to parse.
        raw: String,
    },

    /// A weekly-schedule field could not be decoded.
    #[error("invalid schedule value for {key}: {source}")]
    InvalidSchedule {
        /// The attribute key being transformed.
        key: String,
        /// The underlying decode failure.
        source: ParseError,
    },
}

/// Errors related to device control operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device explicitly rejected an attribute update.
    #[error("device rejected update for {key}")]
    UpdateRejected {
        /// The attribute key that was being written.
        key: String,
    },

    /// The control collaborator failed to carry out the operation.
    #[error("control operation failed: {0}")]
    ControlFailed(String),

    /// No writable control is registered for the attribute key.
    #[error("no writable schedule control for key {0}")]
    UnknownControl(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
