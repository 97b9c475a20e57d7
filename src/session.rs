// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device session state.
//!
//! A [`DeviceSession`] owns everything that is per-connection: the set of
//! attribute keys that have already produced an entity, the registered
//! [`Sensor`]s, and the registered [`ScheduleText`] controls. Each new
//! snapshot both discovers entities for newly reported keys and refreshes
//! every registered entity.
//!
//! The session uses interior mutability (`parking_lot::RwLock`) so a
//! connection task publishing snapshots and consumer tasks reading values
//! or submitting schedule updates can share one session behind an `Arc`
//! without an outer lock. No lock is held across an await.

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::debug;

use crate::attribute::{AttributeSnapshot, SCHEDULE_CONTROLS, SENSOR_DESCRIPTORS};
use crate::control::DeviceControl;
use crate::entity::{ScheduleText, Sensor};
use crate::error::{DeviceError, Error};

#[derive(Debug, Default)]
struct SessionInner {
    seen_sensors: HashSet<&'static str>,
    seen_schedules: HashSet<&'static str>,
    sensors: Vec<Sensor>,
    schedules: Vec<ScheduleText>,
}

/// Session state for one connected device.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vailr_lib::session::DeviceSession;
/// use vailr_lib::attribute::AttributeSnapshot;
///
/// let session = DeviceSession::new("boiler42");
///
/// let mut snapshot = AttributeSnapshot::new();
/// snapshot.insert("Tank_temperature", json!(100));
/// let added = session.apply_snapshot(&snapshot);
/// assert_eq!(added, 1);
///
/// let sensor = session.sensor("Tank_temperature").unwrap();
/// assert!(sensor.is_available());
/// ```
#[derive(Debug)]
pub struct DeviceSession {
    device_id: String,
    inner: RwLock<SessionInner>,
}

impl DeviceSession {
    /// Creates a session for a device. No entities exist until the first
    /// snapshot is applied.
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            inner: RwLock::new(SessionInner::default()),
        }
    }

    /// Returns the device identifier this session tracks.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Applies a fresh state snapshot.
    ///
    /// Keys that appear in the snapshot for the first time register new
    /// entities, in descriptor-table order; keys seen before never register
    /// twice. Every registered entity is then refreshed from the snapshot,
    /// so entities whose keys disappeared become unavailable.
    ///
    /// Returns the number of newly registered entities.
    pub fn apply_snapshot(&self, snapshot: &AttributeSnapshot) -> usize {
        let mut inner = self.inner.write();
        let mut added = 0;

        for descriptor in SENSOR_DESCRIPTORS {
            if snapshot.contains(descriptor.key) && inner.seen_sensors.insert(descriptor.key) {
                inner.sensors.push(Sensor::new(descriptor));
                added += 1;
            }
        }
        for descriptor in SCHEDULE_CONTROLS {
            if snapshot.contains(descriptor.key) && inner.seen_schedules.insert(descriptor.key) {
                inner.schedules.push(ScheduleText::new(descriptor));
                added += 1;
            }
        }

        for sensor in &mut inner.sensors {
            sensor.update(snapshot);
        }
        for schedule in &mut inner.schedules {
            schedule.update(snapshot);
        }

        if added > 0 {
            debug!(
                device_id = %self.device_id,
                added,
                sensors = inner.sensors.len(),
                schedules = inner.schedules.len(),
                "registered new entities"
            );
        }
        added
    }

    /// Returns a copy of the sensor registered for a key.
    #[must_use]
    pub fn sensor(&self, key: &str) -> Option<Sensor> {
        self.inner
            .read()
            .sensors
            .iter()
            .find(|s| s.key() == key)
            .cloned()
    }

    /// Returns copies of all registered sensors, in registration order.
    #[must_use]
    pub fn sensors(&self) -> Vec<Sensor> {
        self.inner.read().sensors.clone()
    }

    /// Returns a copy of the schedule control registered for a key.
    #[must_use]
    pub fn schedule(&self, key: &str) -> Option<ScheduleText> {
        self.inner
            .read()
            .schedules
            .iter()
            .find(|t| t.key() == key)
            .cloned()
    }

    /// Returns copies of all registered schedule controls.
    #[must_use]
    pub fn schedules(&self) -> Vec<ScheduleText> {
        self.inner.read().schedules.clone()
    }

    /// Returns the current display string of a schedule control, if the
    /// control exists and is available.
    #[must_use]
    pub fn schedule_display(&self, key: &str) -> Option<String> {
        self.inner
            .read()
            .schedules
            .iter()
            .find(|t| t.key() == key)
            .and_then(|t| t.value().map(ToString::to_string))
    }

    /// Submits user-entered schedule text for a registered control.
    ///
    /// Runs the full write path: parse, encode, submit through `control`,
    /// then update the locally displayed value unless the device rejected
    /// the write. The session lock is not held while awaiting the device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Device`] with
    /// [`DeviceError::UnknownControl`] when no control is registered for
    /// `key`, [`Error::Parse`] for invalid input, and [`Error::Device`]
    /// when the device rejects the update.
    pub async fn set_schedule<C: DeviceControl>(
        &self,
        key: &str,
        input: &str,
        control: &C,
    ) -> Result<(), Error> {
        let mut entity = self
            .schedule(key)
            .ok_or_else(|| DeviceError::UnknownControl(key.to_string()))?;

        entity.set_value(input, control).await?;

        let mut inner = self.inner.write();
        if let Some(slot) = inner.schedules.iter_mut().find(|t| t.key() == key) {
            *slot = entity;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::control::{AttributeUpdate, ControlOutcome};

    struct StubControl {
        response: Result<ControlOutcome, DeviceError>,
        seen: Mutex<Vec<AttributeUpdate>>,
    }

    impl StubControl {
        fn new(response: Result<ControlOutcome, DeviceError>) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl DeviceControl for StubControl {
        async fn control_device(
            &self,
            update: AttributeUpdate,
        ) -> Result<ControlOutcome, DeviceError> {
            self.seen.lock().push(update);
            self.response.clone()
        }
    }

    fn snapshot(pairs: &[(&str, serde_json::Value)]) -> AttributeSnapshot {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn discovers_entities_for_reported_keys_only() {
        let session = DeviceSession::new("boiler42");
        let added = session.apply_snapshot(&snapshot(&[
            ("Tank_temperature", json!(100)),
            ("Unknown_Attribute", json!(1)),
        ]));

        assert_eq!(added, 1);
        assert!(session.sensor("Tank_temperature").is_some());
        assert!(session.sensor("Room_Temperature").is_none());
    }

    #[test]
    fn schedule_key_registers_sensor_and_control() {
        let session = DeviceSession::new("boiler42");
        let added = session.apply_snapshot(&snapshot(&[(
            "Start_Time_CH1",
            json!("070009000000000000000000"),
        )]));

        // One read-only sensor plus one writable control.
        assert_eq!(added, 2);
        assert!(session.sensor("Start_Time_CH1").is_some());
        assert!(session.schedule("Start_Time_CH1").is_some());
        assert_eq!(
            session.schedule_display("Start_Time_CH1"),
            Some("07:00-09:00".to_string())
        );
    }

    #[test]
    fn repeated_snapshots_never_register_twice() {
        let session = DeviceSession::new("boiler42");
        let snap = snapshot(&[("Tank_temperature", json!(100))]);

        assert_eq!(session.apply_snapshot(&snap), 1);
        assert_eq!(session.apply_snapshot(&snap), 0);
        assert_eq!(session.sensors().len(), 1);
    }

    #[test]
    fn later_snapshots_can_add_entities() {
        let session = DeviceSession::new("boiler42");
        session.apply_snapshot(&snapshot(&[("Tank_temperature", json!(100))]));
        let added = session.apply_snapshot(&snapshot(&[
            ("Tank_temperature", json!(100)),
            ("reserved_data1", json!("19")),
        ]));

        assert_eq!(added, 1);
        assert_eq!(session.sensors().len(), 2);
    }

    #[test]
    fn registered_entity_goes_unavailable_when_key_disappears() {
        let session = DeviceSession::new("boiler42");
        session.apply_snapshot(&snapshot(&[("Tank_temperature", json!(100))]));
        assert!(session.sensor("Tank_temperature").unwrap().is_available());

        session.apply_snapshot(&AttributeSnapshot::new());
        let sensor = session.sensor("Tank_temperature").unwrap();
        assert!(!sensor.is_available());
        assert!(sensor.value().is_none());
    }

    #[tokio::test]
    async fn set_schedule_updates_stored_display() {
        let session = DeviceSession::new("boiler42");
        session.apply_snapshot(&snapshot(&[(
            "Start_Time_CH1",
            json!("000000000000000000000000"),
        )]));
        assert_eq!(session.schedule_display("Start_Time_CH1"), Some("0".into()));

        let control = StubControl::new(Ok(ControlOutcome::Accepted));
        session
            .set_schedule("Start_Time_CH1", "07:00-09:00", &control)
            .await
            .unwrap();

        assert_eq!(
            session.schedule_display("Start_Time_CH1"),
            Some("07:00-09:00".to_string())
        );
        assert_eq!(
            control.seen.lock()[0].value(),
            "070009000000000000000000"
        );
    }

    #[tokio::test]
    async fn set_schedule_rejected_keeps_stored_display() {
        let session = DeviceSession::new("boiler42");
        session.apply_snapshot(&snapshot(&[(
            "Start_Time_CH1",
            json!("070009000000000000000000"),
        )]));

        let control = StubControl::new(Ok(ControlOutcome::Rejected));
        let result = session
            .set_schedule("Start_Time_CH1", "10:00-11:00", &control)
            .await;

        assert!(matches!(
            result,
            Err(Error::Device(DeviceError::UpdateRejected { .. }))
        ));
        assert_eq!(
            session.schedule_display("Start_Time_CH1"),
            Some("07:00-09:00".to_string())
        );
    }

    #[tokio::test]
    async fn set_schedule_unknown_key_is_an_error() {
        let session = DeviceSession::new("boiler42");
        let control = StubControl::new(Ok(ControlOutcome::Accepted));

        let result = session
            .set_schedule("Start_Time_CH1", "07:00-09:00", &control)
            .await;

        assert!(matches!(
            result,
            Err(Error::Device(DeviceError::UnknownControl(_)))
        ));
        assert!(control.seen.lock().is_empty());
    }
}
