// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only sensor values surfaced from the attribute map.

use tracing::warn;

use crate::attribute::{AttributeSnapshot, DisplayValue, SensorDescriptor, Transform};

/// One read-only sensor: a described attribute plus its current
/// displayable value.
///
/// A sensor is available iff the latest snapshot reported its key and the
/// key's transform succeeded. On any failure the cached value is cleared
/// rather than left stale.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vailr_lib::attribute::{AttributeSnapshot, find_sensor};
/// use vailr_lib::entity::Sensor;
///
/// let mut sensor = Sensor::new(find_sensor("reserved_data1").unwrap());
/// let mut snapshot = AttributeSnapshot::new();
/// snapshot.insert("reserved_data1", json!("19"));
///
/// sensor.update(&snapshot);
/// assert!(sensor.is_available());
/// assert_eq!(sensor.value().unwrap().as_f64(), Some(2.5));
/// ```
#[derive(Debug, Clone)]
pub struct Sensor {
    descriptor: &'static SensorDescriptor,
    value: Option<DisplayValue>,
    available: bool,
}

impl Sensor {
    /// Creates a sensor for a descriptor. The value is unknown until the
    /// first [`update`](Self::update).
    #[must_use]
    pub const fn new(descriptor: &'static SensorDescriptor) -> Self {
        Self {
            descriptor,
            value: None,
            available: false,
        }
    }

    /// Returns the sensor's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static SensorDescriptor {
        self.descriptor
    }

    /// Returns the attribute key this sensor reads.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.descriptor.key
    }

    /// Returns the current display value, if available.
    #[must_use]
    pub const fn value(&self) -> Option<&DisplayValue> {
        self.value.as_ref()
    }

    /// Returns `true` if the latest snapshot produced a value.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Returns a unique identifier for this sensor on a device.
    #[must_use]
    pub fn unique_id(&self, device_id: &str) -> String {
        format!("{device_id}_{}", self.descriptor.key)
    }

    /// Refreshes the sensor from a snapshot.
    ///
    /// A missing key or a failed transform clears the value and marks the
    /// sensor unavailable; sibling sensors are unaffected.
    pub fn update(&mut self, snapshot: &AttributeSnapshot) {
        let key = self.descriptor.key;
        let Some(raw) = snapshot.get(key) else {
            self.clear();
            return;
        };
        match Transform::for_key(key).apply(key, raw) {
            Ok(value) => {
                self.value = Some(value);
                self.available = true;
            }
            Err(err) => {
                warn!(key, error = %err, "failed to transform attribute value");
                self.clear();
            }
        }
    }

    fn clear(&mut self) {
        self.value = None;
        self.available = false;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::attribute::find_sensor;

    fn sensor(key: &str) -> Sensor {
        Sensor::new(find_sensor(key).unwrap())
    }

    #[test]
    fn new_sensor_is_unavailable() {
        let s = sensor("Room_Temperature");
        assert!(!s.is_available());
        assert!(s.value().is_none());
    }

    #[test]
    fn passthrough_sensor_surfaces_raw_value() {
        let mut s = sensor("Room_Temperature");
        let mut snapshot = AttributeSnapshot::new();
        snapshot.insert("Room_Temperature", json!(21.5));

        s.update(&snapshot);
        assert!(s.is_available());
        assert_eq!(s.value().unwrap().as_f64(), Some(21.5));
    }

    #[test]
    fn tank_temperature_is_converted() {
        let mut s = sensor("Tank_temperature");
        let mut snapshot = AttributeSnapshot::new();
        snapshot.insert("Tank_temperature", json!(100));

        s.update(&snapshot);
        let celsius = s.value().unwrap().as_f64().unwrap();
        assert!((celsius - 37.777_777_777_777_78).abs() < 1e-9);
    }

    #[test]
    fn schedule_sensor_decodes_wire_value() {
        let mut s = sensor("Start_Time_DHW3");
        let mut snapshot = AttributeSnapshot::new();
        snapshot.insert("Start_Time_DHW3", json!("070009001200160000000000"));

        s.update(&snapshot);
        assert_eq!(
            s.value().unwrap().as_str(),
            Some("07:00-09:00, 18:00-22:00")
        );
    }

    #[test]
    fn missing_key_clears_previous_value() {
        let mut s = sensor("Room_Temperature");
        let mut snapshot = AttributeSnapshot::new();
        snapshot.insert("Room_Temperature", json!(21.5));
        s.update(&snapshot);
        assert!(s.is_available());

        s.update(&AttributeSnapshot::new());
        assert!(!s.is_available());
        assert!(s.value().is_none());
    }

    #[test]
    fn failed_transform_clears_previous_value() {
        let mut s = sensor("reserved_data1");
        let mut snapshot = AttributeSnapshot::new();
        snapshot.insert("reserved_data1", json!("19"));
        s.update(&snapshot);
        assert!(s.is_available());

        snapshot.insert("reserved_data1", json!("not hex"));
        s.update(&snapshot);
        assert!(!s.is_available());
        assert!(s.value().is_none());
    }

    #[test]
    fn wrong_length_schedule_is_unavailable_not_zero() {
        let mut s = sensor("Start_Time_CH1");
        let mut snapshot = AttributeSnapshot::new();
        snapshot.insert("Start_Time_CH1", json!("0700"));

        s.update(&snapshot);
        // Distinct from the confirmed-empty schedule, which displays "0".
        assert!(!s.is_available());
        assert!(s.value().is_none());
    }

    #[test]
    fn unique_id_combines_device_and_key() {
        let s = sensor("Brand");
        assert_eq!(s.unique_id("boiler42"), "boiler42_Brand");
    }
}
