// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device attribute handling.
//!
//! The boiler reports its state as a flat mapping of attribute keys to raw
//! values ([`AttributeSnapshot`]). This module describes that surface
//! ([`SENSOR_DESCRIPTORS`], [`SCHEDULE_CONTROLS`]) and converts raw values
//! into displayable ones ([`Transform`], [`DisplayValue`]).
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use vailr_lib::attribute::{AttributeSnapshot, Transform};
//!
//! let mut snapshot = AttributeSnapshot::new();
//! snapshot.insert("reserved_data1", json!("19"));
//!
//! let raw = snapshot.get("reserved_data1").unwrap();
//! let value = Transform::for_key("reserved_data1")
//!     .apply("reserved_data1", raw)
//!     .unwrap();
//! assert_eq!(value.as_f64(), Some(2.5));
//! ```

mod descriptor;
mod snapshot;
mod transform;

pub use descriptor::{
    ControlDescriptor, DeviceClass, SCHEDULE_CONTROLS, SENSOR_DESCRIPTORS, SensorDescriptor, Unit,
    find_schedule_control, find_sensor, heating_schedule_key, hot_water_schedule_key,
};
pub use snapshot::AttributeSnapshot;
pub use transform::{DisplayValue, Transform};
