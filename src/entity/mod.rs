// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-attribute entities surfaced to consumers.
//!
//! An entity pairs one described attribute with its current displayable
//! state: [`Sensor`] for the read-only surface, [`ScheduleText`] for the
//! writable weekly-schedule controls. Both refresh from an
//! [`AttributeSnapshot`](crate::attribute::AttributeSnapshot) and clear
//! their value (rather than going stale) whenever the key is missing or
//! its transform fails.

mod schedule;
mod sensor;

pub use schedule::ScheduleText;
pub use sensor::Sensor;
