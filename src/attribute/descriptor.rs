// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static descriptors for the boiler's reported attributes.
//!
//! The device reports a flat attribute map; these tables describe which
//! keys are surfaced, under what display name, and with what measurement
//! semantics. [`SENSOR_DESCRIPTORS`] covers the read-only surface;
//! [`SCHEDULE_CONTROLS`] lists the writable weekly-schedule keys (one per
//! weekday, central heating only — the hot-water schedules are read-only).

use std::fmt;

use chrono::Weekday;

/// Broad measurement category of a sensor attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DeviceClass {
    /// A temperature reading or setpoint.
    Temperature,
    /// A water pressure reading.
    Pressure,
}

/// Unit of measurement for a sensor attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Unit {
    /// Degrees Celsius.
    Celsius,
    /// Bar.
    Bar,
}

impl Unit {
    /// Returns the display symbol for the unit.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Bar => "bar",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Description of one read-only sensor attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorDescriptor {
    /// Attribute key as reported by the device.
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Measurement category, if any.
    pub device_class: Option<DeviceClass>,
    /// Unit of measurement, if any.
    pub unit: Option<Unit>,
}

impl SensorDescriptor {
    const fn temperature(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            name,
            device_class: Some(DeviceClass::Temperature),
            unit: Some(Unit::Celsius),
        }
    }

    const fn pressure(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            name,
            device_class: Some(DeviceClass::Pressure),
            unit: Some(Unit::Bar),
        }
    }

    const fn plain(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            name,
            device_class: None,
            unit: None,
        }
    }
}

/// Description of one writable weekly-schedule control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlDescriptor {
    /// Attribute key as reported by (and written to) the device.
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
}

/// All read-only sensor attributes this library surfaces.
///
/// Key strings match the device protocol verbatim, including its
/// inconsistent casing (`Flow_temperature`, `Max_NumBer_Of_Timeslots_CH`).
pub const SENSOR_DESCRIPTORS: &[SensorDescriptor] = &[
    SensorDescriptor::temperature(
        "Room_Temperature_Setpoint_Comfort",
        "CH temperature room setpoint comfort mode",
    ),
    SensorDescriptor::temperature(
        "Room_Temperature_Setpoint_ECO",
        "CH temperature room setpoint ECO mode",
    ),
    SensorDescriptor::temperature("Outdoor_Temperature", "CH temperature outdoor"),
    SensorDescriptor::temperature("Room_Temperature", "CH temperature room"),
    SensorDescriptor::temperature(
        "Lower_Limitation_of_CH_Setpoint",
        "CH temperature setpoint lower",
    ),
    SensorDescriptor::temperature(
        "Upper_Limitation_of_CH_Setpoint",
        "CH temperature setpoint upper",
    ),
    SensorDescriptor::temperature("Flow_Temperature_Setpoint", "CH temperature flow setpoint"),
    SensorDescriptor::temperature("Flow_temperature", "CH temperature flow current"),
    SensorDescriptor::temperature("return_temperature", "CH temperature flow return"),
    SensorDescriptor::temperature("Tank_temperature", "Water tank temperature"),
    SensorDescriptor::temperature("DHW_setpoint", "DHW temperature setpoint"),
    SensorDescriptor::temperature(
        "Lower_Limitation_of_DHW_Setpoint",
        "DHW temperature setpoint lower",
    ),
    SensorDescriptor::temperature(
        "Upper_Limitation_of_DHW_Setpoint",
        "DHW temperature setpoint upper",
    ),
    SensorDescriptor::temperature("Current_DHW_Setpoint", "DHW temperature setpoint current"),
    SensorDescriptor::plain("Heating_System_Setting", "CH heating system setting"),
    SensorDescriptor::plain("Time_slot_type", "Time slot type"),
    SensorDescriptor::plain("Slot_current_CH", "CH slot current"),
    SensorDescriptor::plain("Slot_current_DHW", "DHW slot current"),
    SensorDescriptor::plain("Heating_Curve", "CH heating curve"),
    SensorDescriptor::plain("Mode_Setting_DHW", "DHW mode setting"),
    SensorDescriptor::plain("Mode_Setting_CH", "CH mode setting"),
    SensorDescriptor::plain("DHW_Function", "DHW function"),
    SensorDescriptor::plain("Max_NumBer_Of_Timeslots_CH", "CH max timeslots"),
    SensorDescriptor::plain("Max_NumBer_Of_Timeslots_DHW", "DHW max timeslots"),
    SensorDescriptor::pressure("reserved_data1", "CH water pressure"),
    SensorDescriptor::plain("reserved_data2", "Reserved data 2"),
    SensorDescriptor::plain("reserved_data3", "Reserved data 3"),
    SensorDescriptor::plain("Fault_List", "Fault list"),
    SensorDescriptor::plain("Maintenance", "Maintenance"),
    SensorDescriptor::plain("Brand", "Brand"),
    SensorDescriptor::plain("DSN", "DSN"),
    SensorDescriptor::plain("Start_Time_DHW1", "DHW schedule Monday"),
    SensorDescriptor::plain("Start_Time_DHW2", "DHW schedule Tuesday"),
    SensorDescriptor::plain("Start_Time_DHW3", "DHW schedule Wednesday"),
    SensorDescriptor::plain("Start_Time_DHW4", "DHW schedule Thursday"),
    SensorDescriptor::plain("Start_Time_DHW5", "DHW schedule Friday"),
    SensorDescriptor::plain("Start_Time_DHW6", "DHW schedule Saturday"),
    SensorDescriptor::plain("Start_Time_DHW7", "DHW schedule Sunday"),
    SensorDescriptor::plain("Start_Time_CH1", "CH schedule Monday"),
    SensorDescriptor::plain("Start_Time_CH2", "CH schedule Tuesday"),
    SensorDescriptor::plain("Start_Time_CH3", "CH schedule Wednesday"),
    SensorDescriptor::plain("Start_Time_CH4", "CH schedule Thursday"),
    SensorDescriptor::plain("Start_Time_CH5", "CH schedule Friday"),
    SensorDescriptor::plain("Start_Time_CH6", "CH schedule Saturday"),
    SensorDescriptor::plain("Start_Time_CH7", "CH schedule Sunday"),
];

/// The writable central-heating schedule controls, Monday through Sunday.
pub const SCHEDULE_CONTROLS: &[ControlDescriptor] = &[
    ControlDescriptor {
        key: "Start_Time_CH1",
        name: "CH start time Monday",
    },
    ControlDescriptor {
        key: "Start_Time_CH2",
        name: "CH start time Tuesday",
    },
    ControlDescriptor {
        key: "Start_Time_CH3",
        name: "CH start time Wednesday",
    },
    ControlDescriptor {
        key: "Start_Time_CH4",
        name: "CH start time Thursday",
    },
    ControlDescriptor {
        key: "Start_Time_CH5",
        name: "CH start time Friday",
    },
    ControlDescriptor {
        key: "Start_Time_CH6",
        name: "CH start time Saturday",
    },
    ControlDescriptor {
        key: "Start_Time_CH7",
        name: "CH start time Sunday",
    },
];

/// Returns the central-heating schedule key for a weekday.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use vailr_lib::attribute::heating_schedule_key;
///
/// assert_eq!(heating_schedule_key(Weekday::Mon), "Start_Time_CH1");
/// assert_eq!(heating_schedule_key(Weekday::Sun), "Start_Time_CH7");
/// ```
#[must_use]
pub fn heating_schedule_key(day: Weekday) -> &'static str {
    SCHEDULE_CONTROLS[day.num_days_from_monday() as usize].key
}

/// Returns the domestic-hot-water schedule key for a weekday.
#[must_use]
pub fn hot_water_schedule_key(day: Weekday) -> &'static str {
    const KEYS: [&str; 7] = [
        "Start_Time_DHW1",
        "Start_Time_DHW2",
        "Start_Time_DHW3",
        "Start_Time_DHW4",
        "Start_Time_DHW5",
        "Start_Time_DHW6",
        "Start_Time_DHW7",
    ];
    KEYS[day.num_days_from_monday() as usize]
}

/// Looks up the sensor descriptor for an attribute key.
#[must_use]
pub fn find_sensor(key: &str) -> Option<&'static SensorDescriptor> {
    SENSOR_DESCRIPTORS.iter().find(|d| d.key == key)
}

/// Looks up the writable schedule-control descriptor for an attribute key.
#[must_use]
pub fn find_schedule_control(key: &str) -> Option<&'static ControlDescriptor> {
    SCHEDULE_CONTROLS.iter().find(|d| d.key == key)
}
