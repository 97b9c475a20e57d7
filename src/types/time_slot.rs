// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time slot type for weekly boiler schedules.
//!
//! This module provides a type-safe representation of a single heating
//! time range within a day, with a start and an end time.

use std::fmt;

use chrono::NaiveTime;

use crate::error::ValueError;

/// Maximum hour component of a slot time.
const MAX_HOUR: u8 = 23;

/// Maximum minute component of a slot time.
const MAX_MINUTE: u8 = 59;

/// One contiguous time range within a day.
///
/// A slot carries a start time and an end time, each as an hour/minute
/// pair. The boiler does not require the start to precede the end, so no
/// ordering between the two endpoints is enforced.
///
/// # Examples
///
/// ```
/// use vailr_lib::types::TimeSlot;
///
/// let slot = TimeSlot::new(7, 0, 9, 30).unwrap();
/// assert_eq!(slot.start_hour(), 7);
/// assert_eq!(slot.end_minute(), 30);
/// assert_eq!(slot.to_string(), "07:00-09:30");
///
/// // Invalid components return error
/// assert!(TimeSlot::new(24, 0, 9, 30).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimeSlot {
    start_hour: u8,
    start_minute: u8,
    end_hour: u8,
    end_minute: u8,
}

impl TimeSlot {
    /// Creates a new time slot.
    ///
    /// # Arguments
    ///
    /// * `start_hour` / `end_hour` - Hour components (0-23)
    /// * `start_minute` / `end_minute` - Minute components (0-59)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if an hour exceeds 23 or a minute
    /// exceeds 59.
    pub fn new(
        start_hour: u8,
        start_minute: u8,
        end_hour: u8,
        end_minute: u8,
    ) -> Result<Self, ValueError> {
        for hour in [start_hour, end_hour] {
            if hour > MAX_HOUR {
                return Err(ValueError::OutOfRange {
                    min: 0,
                    max: MAX_HOUR,
                    actual: hour,
                });
            }
        }
        for minute in [start_minute, end_minute] {
            if minute > MAX_MINUTE {
                return Err(ValueError::OutOfRange {
                    min: 0,
                    max: MAX_MINUTE,
                    actual: minute,
                });
            }
        }
        Ok(Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        })
    }

    /// Creates a time slot, clamping each component to its valid range.
    ///
    /// Hours above 23 are clamped to 23, minutes above 59 to 59.
    ///
    /// # Examples
    ///
    /// ```
    /// use vailr_lib::types::TimeSlot;
    ///
    /// let slot = TimeSlot::clamped(25, 61, 5, 5);
    /// assert_eq!(slot.start_hour(), 23);
    /// assert_eq!(slot.start_minute(), 59);
    /// ```
    #[must_use]
    pub const fn clamped(
        start_hour: u8,
        start_minute: u8,
        end_hour: u8,
        end_minute: u8,
    ) -> Self {
        Self {
            start_hour: if start_hour > MAX_HOUR {
                MAX_HOUR
            } else {
                start_hour
            },
            start_minute: if start_minute > MAX_MINUTE {
                MAX_MINUTE
            } else {
                start_minute
            },
            end_hour: if end_hour > MAX_HOUR { MAX_HOUR } else { end_hour },
            end_minute: if end_minute > MAX_MINUTE {
                MAX_MINUTE
            } else {
                end_minute
            },
        }
    }

    /// Creates a slot from raw wire components without range validation.
    ///
    /// The wire decoder is deliberately permissive: a hex field outside the
    /// clock range survives decoding and is rendered as-is. Encoding clamps.
    pub(crate) const fn from_wire_raw(
        start_hour: u8,
        start_minute: u8,
        end_hour: u8,
        end_minute: u8,
    ) -> Self {
        Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        }
    }

    /// Returns the start hour component.
    #[must_use]
    pub const fn start_hour(&self) -> u8 {
        self.start_hour
    }

    /// Returns the start minute component.
    #[must_use]
    pub const fn start_minute(&self) -> u8 {
        self.start_minute
    }

    /// Returns the end hour component.
    #[must_use]
    pub const fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Returns the end minute component.
    #[must_use]
    pub const fn end_minute(&self) -> u8 {
        self.end_minute
    }

    /// Returns the start time as a [`chrono::NaiveTime`].
    ///
    /// Returns `None` when a raw decoded component lies outside the clock
    /// range.
    #[must_use]
    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.start_hour), u32::from(self.start_minute), 0)
    }

    /// Returns the end time as a [`chrono::NaiveTime`].
    ///
    /// Returns `None` when a raw decoded component lies outside the clock
    /// range.
    #[must_use]
    pub fn end_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.end_hour), u32::from(self.end_minute), 0)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_hour, self.start_minute, self.end_hour, self.end_minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_slot_valid_values() {
        let slot = TimeSlot::new(0, 0, 23, 59).unwrap();
        assert_eq!(slot.start_hour(), 0);
        assert_eq!(slot.start_minute(), 0);
        assert_eq!(slot.end_hour(), 23);
        assert_eq!(slot.end_minute(), 59);
    }

    #[test]
    fn time_slot_invalid_hour() {
        let result = TimeSlot::new(24, 0, 9, 0);
        assert!(matches!(
            result,
            Err(ValueError::OutOfRange {
                max: 23,
                actual: 24,
                ..
            })
        ));
    }

    #[test]
    fn time_slot_invalid_minute() {
        let result = TimeSlot::new(7, 60, 9, 0);
        assert!(matches!(
            result,
            Err(ValueError::OutOfRange {
                max: 59,
                actual: 60,
                ..
            })
        ));
    }

    #[test]
    fn time_slot_clamped() {
        let slot = TimeSlot::clamped(25, 61, 5, 5);
        assert_eq!(slot.start_hour(), 23);
        assert_eq!(slot.start_minute(), 59);
        assert_eq!(slot.end_hour(), 5);
        assert_eq!(slot.end_minute(), 5);
    }

    #[test]
    fn time_slot_clamped_passes_valid_values_through() {
        let slot = TimeSlot::clamped(7, 0, 9, 30);
        assert_eq!(slot, TimeSlot::new(7, 0, 9, 30).unwrap());
    }

    #[test]
    fn time_slot_display() {
        let slot = TimeSlot::new(7, 5, 18, 30).unwrap();
        assert_eq!(slot.to_string(), "07:05-18:30");
    }

    #[test]
    fn time_slot_end_may_precede_start() {
        // Overnight ranges are left to the device to interpret.
        let slot = TimeSlot::new(22, 0, 6, 0).unwrap();
        assert_eq!(slot.to_string(), "22:00-06:00");
    }

    #[test]
    fn time_slot_chrono_accessors() {
        let slot = TimeSlot::new(7, 30, 9, 0).unwrap();
        assert_eq!(slot.start_time(), NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(slot.end_time(), NaiveTime::from_hms_opt(9, 0, 0));
    }

    #[test]
    fn time_slot_chrono_accessors_on_raw_out_of_range() {
        let slot = TimeSlot::from_wire_raw(255, 0, 9, 0);
        assert!(slot.start_time().is_none());
        assert!(slot.end_time().is_some());
    }
}
