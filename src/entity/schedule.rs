// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Writable weekly-schedule controls.
//!
//! One [`ScheduleText`] exists per central-heating weekday key. The read
//! direction decodes the device's wire value into the display form; the
//! write direction parses user text, encodes it, and submits the update
//! through the external [`DeviceControl`] collaborator.

use tracing::{debug, error, warn};

use crate::attribute::{AttributeSnapshot, ControlDescriptor};
use crate::control::{AttributeUpdate, ControlOutcome, DeviceControl};
use crate::error::{DeviceError, Error, ParseError};
use crate::types::WeekSchedule;

/// One writable schedule control: a weekday key plus its current display
/// value.
///
/// Accepted input is either `"0"` (clear all slots) or up to three
/// `HH:MM-HH:MM` ranges separated by commas. Invalid input is rejected as a
/// whole: nothing is sent to the device and the displayed value is left
/// unchanged.
#[derive(Debug, Clone)]
pub struct ScheduleText {
    descriptor: &'static ControlDescriptor,
    value: Option<String>,
    available: bool,
}

impl ScheduleText {
    /// Creates a control for a descriptor. The value is unknown until the
    /// first [`update`](Self::update).
    #[must_use]
    pub const fn new(descriptor: &'static ControlDescriptor) -> Self {
        Self {
            descriptor,
            value: None,
            available: false,
        }
    }

    /// Returns the control's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ControlDescriptor {
        self.descriptor
    }

    /// Returns the attribute key this control reads and writes.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.descriptor.key
    }

    /// Returns the current display value, if available.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if a value is currently displayed.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Returns a unique identifier for this control on a device.
    #[must_use]
    pub fn unique_id(&self, device_id: &str) -> String {
        format!("{device_id}_{}", self.descriptor.key)
    }

    /// Refreshes the display value from a snapshot.
    ///
    /// A missing key or a value that is not a 24-character wire string
    /// clears the display and marks the control unavailable. Malformed
    /// groups inside an otherwise valid wire string are skipped by the
    /// decoder.
    pub fn update(&mut self, snapshot: &AttributeSnapshot) {
        let decoded = snapshot
            .get(self.descriptor.key)
            .and_then(|raw| raw.as_str())
            .and_then(|wire| WeekSchedule::from_wire(wire).ok());
        match decoded {
            Some(schedule) => {
                self.value = Some(schedule.to_string());
                self.available = true;
            }
            None => {
                self.value = None;
                self.available = false;
            }
        }
    }

    /// Applies user-entered schedule text and submits it to the device.
    ///
    /// On success the displayed value is optimistically updated to the
    /// canonical rendering of the parsed slots. An explicit device
    /// rejection withholds that update; a client that completes without a
    /// signal (or fails at transport level) is treated as unconfirmed and
    /// the optimistic update proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for invalid input (nothing is sent) and
    /// [`Error::Device`] when the device rejects the update.
    pub async fn set_value<C: DeviceControl>(
        &mut self,
        input: &str,
        control: &C,
    ) -> Result<(), Error> {
        let key = self.descriptor.key;
        debug!(key, input, "schedule update requested");

        let schedule: WeekSchedule = input.parse().map_err(|err: ParseError| {
            error!(key, error = %err, "invalid schedule input");
            err
        })?;
        let wire = schedule.to_wire();
        debug!(key, wire = %wire, "encoded schedule");

        let outcome = match control
            .control_device(AttributeUpdate::new(key, wire.as_str()))
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(key, error = %err, "control operation failed, treating as unconfirmed");
                ControlOutcome::NoConfirmation
            }
        };

        if !outcome.allows_optimistic_update() {
            error!(key, wire = %wire, "device rejected schedule update");
            return Err(DeviceError::UpdateRejected {
                key: key.to_string(),
            }
            .into());
        }

        self.value = Some(schedule.to_string());
        self.available = true;
        Ok(())
    }
}
