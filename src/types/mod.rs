// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for boiler schedules.
//!
//! This module provides type-safe representations of the values exchanged
//! with the device. Each type ensures values are within their valid ranges
//! at construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`TimeSlot`] - One time range within a day (hours 0-23, minutes 0-59)
//! - [`WeekSchedule`] - One day's schedule of up to 3 slots, with the
//!   24-character hex wire codec and the human-readable display form

mod time_slot;
mod week_schedule;

pub use time_slot::TimeSlot;
pub use week_schedule::WeekSchedule;
