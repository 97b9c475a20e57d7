// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device control seam.
//!
//! This library does not talk to the device itself; the network client is
//! an external collaborator that implements [`DeviceControl`]. The write
//! path hands it a single-attribute [`AttributeUpdate`] and interprets the
//! tri-state [`ControlOutcome`] it reports back.

use std::collections::BTreeMap;
use std::future::Future;

use crate::error::DeviceError;

/// A single-attribute update to submit to the device.
///
/// Serializes to the single-key JSON object the device client expects:
///
/// ```
/// use vailr_lib::control::AttributeUpdate;
///
/// let update = AttributeUpdate::new("Start_Time_CH1", "070009000000000000000000");
/// assert_eq!(
///     serde_json::to_string(&update).unwrap(),
///     r#"{"Start_Time_CH1":"070009000000000000000000"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeUpdate {
    key: String,
    value: String,
}

impl AttributeUpdate {
    /// Creates an update for one attribute key.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the attribute key being written.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value being written.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl serde::Serialize for AttributeUpdate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = BTreeMap::new();
        map.insert(&self.key, &self.value);
        map.serialize(serializer)
    }
}

/// Result of a control operation, as reported by the device client.
///
/// Some clients do not acknowledge writes at all; the absence of a signal
/// is distinct from an explicit rejection and still allows the caller to
/// update its locally-displayed value optimistically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    /// The device confirmed the update.
    Accepted,
    /// The device explicitly rejected the update.
    Rejected,
    /// The client completed without a success/failure signal.
    NoConfirmation,
}

impl ControlOutcome {
    /// Returns `true` if the local display value may be updated
    /// optimistically after this outcome.
    #[must_use]
    pub const fn allows_optimistic_update(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// The external collaborator that carries updates to the device.
///
/// Implementations own the network round-trip, along with their own
/// timeout and retry policy. The library only consumes the outcome.
pub trait DeviceControl {
    /// Submits one attribute update to the device.
    fn control_device(
        &self,
        update: AttributeUpdate,
    ) -> impl Future<Output = Result<ControlOutcome, DeviceError>> + Send;
}
