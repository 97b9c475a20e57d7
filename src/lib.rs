// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `VailR` Lib - A Rust library for Vaillant boiler state and schedules.
//!
//! This library turns the flat attribute map a Vaillant-style boiler
//! reports into typed, displayable values, and turns user-entered weekly
//! schedule text back into the device's wire format.
//!
//! # Supported Features
//!
//! - **Schedule codec**: the 24-character hex wire format for up to 3
//!   daily time slots, in both directions
//! - **Schedule input parsing**: `"HH:MM-HH:MM, ..."` user text with
//!   whole-input validation
//! - **Sensor surface**: the boiler's temperature, pressure, mode and
//!   diagnostic attributes with their unit conversions
//! - **Write path**: schedule updates through an external device client,
//!   with optimistic display updates unless the device rejects
//!
//! # Quick Start
//!
//! ## Decoding device state
//!
//! ```
//! use serde_json::json;
//! use vailr_lib::{AttributeSnapshot, DeviceSession};
//!
//! let session = DeviceSession::new("boiler42");
//!
//! // Snapshots arrive from an external device connection.
//! let mut snapshot = AttributeSnapshot::new();
//! snapshot.insert("Tank_temperature", json!(100));
//! snapshot.insert("Start_Time_CH1", json!("070009001200160000000000"));
//! session.apply_snapshot(&snapshot);
//!
//! // Tank temperature arrives in Fahrenheit, displays in Celsius.
//! let tank = session.sensor("Tank_temperature").unwrap();
//! assert!(tank.value().unwrap().as_f64().unwrap() > 37.7);
//!
//! // Monday's heating schedule decodes to readable text.
//! assert_eq!(
//!     session.schedule_display("Start_Time_CH1").unwrap(),
//!     "07:00-09:00, 18:00-22:00"
//! );
//! ```
//!
//! ## Writing a schedule
//!
//! ```no_run
//! use vailr_lib::{AttributeUpdate, ControlOutcome, DeviceControl, DeviceSession};
//! use vailr_lib::error::DeviceError;
//!
//! struct Client;
//!
//! impl DeviceControl for Client {
//!     async fn control_device(
//!         &self,
//!         update: AttributeUpdate,
//!     ) -> Result<ControlOutcome, DeviceError> {
//!         // Submit the single-key update over the network here.
//!         Ok(ControlOutcome::Accepted)
//!     }
//! }
//!
//! # async fn run(session: DeviceSession) -> vailr_lib::Result<()> {
//! session
//!     .set_schedule("Start_Time_CH1", "07:00-09:00, 18:00-22:00", &Client)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with the codec directly
//!
//! ```
//! use vailr_lib::WeekSchedule;
//!
//! let schedule: WeekSchedule = "07:00-09:00".parse()?;
//! assert_eq!(schedule.to_wire(), "070009000000000000000000");
//! # Ok::<(), vailr_lib::error::ParseError>(())
//! ```

pub mod attribute;
pub mod control;
pub mod entity;
pub mod error;
pub mod session;
pub mod types;

pub use attribute::{
    AttributeSnapshot, DisplayValue, SCHEDULE_CONTROLS, SENSOR_DESCRIPTORS, SensorDescriptor,
    Transform,
};
pub use control::{AttributeUpdate, ControlOutcome, DeviceControl};
pub use entity::{ScheduleText, Sensor};
pub use error::{DeviceError, Error, ParseError, Result, TransformError, ValueError};
pub use session::DeviceSession;
pub use types::{TimeSlot, WeekSchedule};
