// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weekly schedule codec for boiler time slots.
//!
//! A Vaillant boiler stores one day's heating (or hot water) schedule as a
//! fixed 24-character hexadecimal string: three consecutive 8-character
//! groups, each encoding one [`TimeSlot`] as four 2-digit hex fields in the
//! order start-hour, start-minute, end-hour, end-minute. The group
//! `"00000000"` marks an unused slot.
//!
//! [`WeekSchedule`] converts between that wire format, a structured slot
//! list, and the human-readable display form (`"07:00-09:00, 18:00-22:00"`,
//! or `"0"` when no slot is active).
//!
//! # Examples
//!
//! ```
//! use vailr_lib::types::WeekSchedule;
//!
//! // Wire -> display
//! let schedule = WeekSchedule::from_wire("070009001200160000000000").unwrap();
//! assert_eq!(schedule.to_string(), "07:00-09:00, 18:00-22:00");
//!
//! // User input -> wire
//! let schedule: WeekSchedule = "07:00-09:00, 18:00-22:00".parse().unwrap();
//! assert_eq!(schedule.to_wire(), "070009001200160000000000");
//!
//! // The empty schedule
//! let empty: WeekSchedule = "0".parse().unwrap();
//! assert_eq!(empty.to_wire(), "000000000000000000000000");
//! assert_eq!(empty.to_string(), "0");
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{ParseError, ValueError};

use super::TimeSlot;

/// Number of slots in one wire-format schedule.
const SLOT_COUNT: usize = 3;

/// Length of one encoded slot group in characters.
const GROUP_LEN: usize = 8;

/// Total length of the wire format in characters.
const WIRE_LEN: usize = SLOT_COUNT * GROUP_LEN;

/// The literal group marking an unused slot.
const UNUSED_GROUP: &str = "00000000";

/// One day's schedule: an ordered list of up to 3 active time slots.
///
/// The empty schedule is a valid, meaningful state ("no schedule"); its
/// display form is the literal `"0"` and its wire form is 24 zeros.
///
/// Slot order is chronological entry order as written by the user or as
/// decoded left to right from the wire string; it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    slots: Vec<TimeSlot>,
}

impl WeekSchedule {
    /// Maximum number of slots a schedule can hold.
    pub const MAX_SLOTS: usize = SLOT_COUNT;

    /// Creates a schedule from a list of slots.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TooManySlots` if more than 3 slots are given.
    pub fn new(slots: Vec<TimeSlot>) -> Result<Self, ValueError> {
        if slots.len() > SLOT_COUNT {
            return Err(ValueError::TooManySlots(slots.len()));
        }
        Ok(Self { slots })
    }

    /// Creates the empty schedule.
    #[must_use]
    pub const fn empty() -> Self {
        Self { slots: Vec::new() }
    }

    /// Returns the active slots in order.
    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Returns `true` if no slot is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Decodes a 24-character wire string into a schedule.
    ///
    /// Unused (`"00000000"`) groups are skipped. A group that is not valid
    /// hex is skipped with a warning and decoding continues with the
    /// remaining groups; a malformed group is never fatal. Hex digits decode
    /// case-insensitively, and decoded components are not range-checked
    /// (the device is trusted on the read path; encoding clamps).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::WrongWireLength` if the input is not exactly
    /// 24 ASCII characters. Callers surface this as "value unavailable",
    /// which is distinct from the confirmed-empty schedule `"0"`.
    pub fn from_wire(raw: &str) -> Result<Self, ParseError> {
        if raw.len() != WIRE_LEN || !raw.is_ascii() {
            return Err(ParseError::WrongWireLength(raw.chars().count()));
        }

        let mut slots = Vec::new();
        for i in 0..SLOT_COUNT {
            let group = &raw[i * GROUP_LEN..(i + 1) * GROUP_LEN];
            if group == UNUSED_GROUP {
                continue;
            }
            match decode_group(group) {
                Some(slot) => slots.push(slot),
                None => warn!(group, "skipping malformed schedule slot"),
            }
        }
        Ok(Self { slots })
    }

    /// Encodes the schedule into its 24-character wire form.
    ///
    /// Always emits exactly 3 groups, padding missing slots with
    /// `"00000000"`. Hour components clamp to [0, 23] and minutes to
    /// [0, 59]; out-of-range values are silently corrected rather than
    /// rejected. Hex digits are uppercase.
    #[must_use]
    pub fn to_wire(&self) -> String {
        let mut wire = String::with_capacity(WIRE_LEN);
        for i in 0..SLOT_COUNT {
            match self.slots.get(i) {
                Some(slot) => {
                    let clamped = TimeSlot::clamped(
                        slot.start_hour(),
                        slot.start_minute(),
                        slot.end_hour(),
                        slot.end_minute(),
                    );
                    wire.push_str(&format!(
                        "{:02X}{:02X}{:02X}{:02X}",
                        clamped.start_hour(),
                        clamped.start_minute(),
                        clamped.end_hour(),
                        clamped.end_minute()
                    ));
                }
                None => wire.push_str(UNUSED_GROUP),
            }
        }
        wire
    }
}

/// Decodes one 8-character group, or `None` if any field is not hex.
fn decode_group(group: &str) -> Option<TimeSlot> {
    let start_hour = u8::from_str_radix(&group[0..2], 16).ok()?;
    let start_minute = u8::from_str_radix(&group[2..4], 16).ok()?;
    let end_hour = u8::from_str_radix(&group[4..6], 16).ok()?;
    let end_minute = u8::from_str_radix(&group[6..8], 16).ok()?;
    Some(TimeSlot::from_wire_raw(
        start_hour,
        start_minute,
        end_hour,
        end_minute,
    ))
}

impl fmt::Display for WeekSchedule {
    /// Formats the schedule for display: `"0"` when empty, otherwise the
    /// slots joined with `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slots.is_empty() {
            return write!(f, "0");
        }
        let rendered: Vec<String> = self.slots.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(", "))
    }
}

impl FromStr for WeekSchedule {
    type Err = ParseError;

    /// Parses user-entered schedule text.
    ///
    /// A trimmed empty string, `"0"`, or case-insensitive `"none"`/`"null"`
    /// clears the schedule. Otherwise the input is split on `,`, empty
    /// segments are dropped, and at most the first 3 segments are kept (a
    /// 4th and later segments are silently ignored). Each segment must be
    /// `HH:MM-HH:MM` with hour in [0, 23] and minute in [0, 59]; the start
    /// is not required to precede the end.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty()
            || s == "0"
            || s.eq_ignore_ascii_case("none")
            || s.eq_ignore_ascii_case("null")
        {
            return Ok(Self::empty());
        }

        let mut slots = Vec::new();
        for segment in s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .take(SLOT_COUNT)
        {
            slots.push(parse_segment(segment)?);
        }
        Ok(Self { slots })
    }
}

/// Parses one `HH:MM-HH:MM` segment.
fn parse_segment(segment: &str) -> Result<TimeSlot, ParseError> {
    let Some((start, end)) = segment.split_once('-') else {
        return Err(ParseError::MissingRangeSeparator(segment.to_string()));
    };
    if !start.contains(':') || !end.contains(':') {
        return Err(ParseError::MissingTimeSeparator(segment.to_string()));
    }

    let (start_hour, start_minute) = parse_time(segment, start)?;
    let (end_hour, end_minute) = parse_time(segment, end)?;

    if start_hour > 23 || end_hour > 23 || start_minute > 59 || end_minute > 59 {
        return Err(ParseError::TimeOutOfRange(segment.to_string()));
    }

    // Components are range-checked above, so the casts cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    let slot = TimeSlot::clamped(
        start_hour as u8,
        start_minute as u8,
        end_hour as u8,
        end_minute as u8,
    );
    Ok(slot)
}

/// Splits one `HH:MM` side at the first `:` and parses both fields.
fn parse_time(segment: &str, side: &str) -> Result<(u32, u32), ParseError> {
    // The caller checked for ':', so split_once cannot fail.
    let (hour, minute) = side.split_once(':').unwrap_or((side, ""));
    let hour = parse_component(segment, hour)?;
    let minute = parse_component(segment, minute)?;
    Ok((hour, minute))
}

fn parse_component(segment: &str, field: &str) -> Result<u32, ParseError> {
    field
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumber {
            segment: segment.to_string(),
            field: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(sh: u8, sm: u8, eh: u8, em: u8) -> TimeSlot {
        TimeSlot::new(sh, sm, eh, em).unwrap()
    }

    // -------------------------------------------------------------------------
    // Wire decode
    // -------------------------------------------------------------------------

    #[test]
    fn decode_two_active_slots() {
        let schedule = WeekSchedule::from_wire("070009001200160000000000").unwrap();
        assert_eq!(schedule.slots(), &[slot(7, 0, 9, 0), slot(18, 0, 22, 0)]);
        assert_eq!(schedule.to_string(), "07:00-09:00, 18:00-22:00");
    }

    #[test]
    fn decode_all_unused_is_empty() {
        let schedule = WeekSchedule::from_wire("000000000000000000000000").unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.to_string(), "0");
    }

    #[test]
    fn decode_is_case_insensitive() {
        let upper = WeekSchedule::from_wire("0A1E0B2D0000000000000000").unwrap();
        let lower = WeekSchedule::from_wire("0a1e0b2d0000000000000000").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "10:30-11:45");
    }

    #[test]
    fn decode_skips_malformed_group() {
        let schedule = WeekSchedule::from_wire("GGGGGGGG0000000000000000").unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.to_string(), "0");
    }

    #[test]
    fn decode_continues_past_malformed_group() {
        let schedule = WeekSchedule::from_wire("GGGGGGGG070009000000000.").unwrap();
        // First and last groups are bad; the middle one survives.
        assert_eq!(schedule.slots(), &[slot(7, 0, 9, 0)]);
    }

    #[test]
    fn decode_keeps_out_of_range_components() {
        // FF hours survive decoding; only encoding clamps.
        let schedule = WeekSchedule::from_wire("FF0009000000000000000000").unwrap();
        assert_eq!(schedule.slots().len(), 1);
        assert_eq!(schedule.slots()[0].start_hour(), 255);
        assert_eq!(schedule.to_string(), "255:00-09:00");
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert!(matches!(
            WeekSchedule::from_wire("0700"),
            Err(ParseError::WrongWireLength(4))
        ));
        assert!(matches!(
            WeekSchedule::from_wire(""),
            Err(ParseError::WrongWireLength(0))
        ));
        assert!(matches!(
            WeekSchedule::from_wire("0700090012001600000000000"),
            Err(ParseError::WrongWireLength(25))
        ));
    }

    #[test]
    fn decode_rejects_non_ascii() {
        // 24 chars but multi-byte; must error rather than panic on slicing.
        let raw = "ä".repeat(24);
        assert!(matches!(
            WeekSchedule::from_wire(&raw),
            Err(ParseError::WrongWireLength(24))
        ));
    }

    // -------------------------------------------------------------------------
    // Wire encode
    // -------------------------------------------------------------------------

    #[test]
    fn encode_empty_is_all_zeros() {
        assert_eq!(
            WeekSchedule::empty().to_wire(),
            "000000000000000000000000"
        );
    }

    #[test]
    fn encode_pads_with_unused_groups() {
        let schedule = WeekSchedule::new(vec![slot(7, 0, 9, 0)]).unwrap();
        assert_eq!(schedule.to_wire(), "070009000000000000000000");
    }

    #[test]
    fn encode_three_slots() {
        let schedule = WeekSchedule::new(vec![
            slot(6, 30, 8, 0),
            slot(12, 0, 13, 30),
            slot(18, 0, 22, 0),
        ])
        .unwrap();
        assert_eq!(schedule.to_wire(), "061E08000C000D1E12001600");
    }

    #[test]
    fn encode_clamps_out_of_range_components() {
        let schedule =
            WeekSchedule::new(vec![TimeSlot::clamped(25, 61, 5, 5)]).unwrap();
        assert_eq!(schedule.to_wire(), "173B05050000000000000000");
    }

    #[test]
    fn encode_clamps_raw_decoded_components() {
        // A permissively decoded schedule re-encodes into clock range.
        let schedule = WeekSchedule::from_wire("FF3C09000000000000000000").unwrap();
        assert_eq!(schedule.to_wire(), "173B09000000000000000000");
    }

    #[test]
    fn encode_is_uppercase_hex() {
        let schedule = WeekSchedule::new(vec![slot(10, 30, 11, 45)]).unwrap();
        assert_eq!(schedule.to_wire(), "0A1E0B2D0000000000000000");
    }

    #[test]
    fn new_rejects_more_than_three_slots() {
        let slots = vec![
            slot(1, 0, 2, 0),
            slot(3, 0, 4, 0),
            slot(5, 0, 6, 0),
            slot(7, 0, 8, 0),
        ];
        assert!(matches!(
            WeekSchedule::new(slots),
            Err(ValueError::TooManySlots(4))
        ));
    }

    // -------------------------------------------------------------------------
    // Display parsing
    // -------------------------------------------------------------------------

    #[test]
    fn parse_two_slots() {
        let schedule: WeekSchedule = "07:00-09:00, 18:00-22:00".parse().unwrap();
        assert_eq!(schedule.slots(), &[slot(7, 0, 9, 0), slot(18, 0, 22, 0)]);
    }

    #[test]
    fn parse_clear_tokens() {
        for input in ["0", "", "   ", "none", "NONE", "null", "Null", " 0 "] {
            let schedule: WeekSchedule = input.parse().unwrap();
            assert!(schedule.is_empty(), "input {input:?} should clear");
        }
    }

    #[test]
    fn parse_trims_segments_and_drops_empty_ones() {
        let schedule: WeekSchedule = " 07:00-09:00 ,, 18:00-22:00 ,".parse().unwrap();
        assert_eq!(schedule.slots().len(), 2);
    }

    #[test]
    fn parse_truncates_to_three_slots() {
        // Source behavior: a 4th segment is silently ignored, even when
        // malformed. Pinned here so the permissiveness stays deliberate.
        let schedule: WeekSchedule = "01:00-02:00, 03:00-04:00, 05:00-06:00, junk"
            .parse()
            .unwrap();
        assert_eq!(schedule.slots().len(), 3);
        assert_eq!(schedule.slots()[2], slot(5, 0, 6, 0));
    }

    #[test]
    fn parse_preserves_segment_order() {
        let schedule: WeekSchedule = "18:00-22:00, 07:00-09:00".parse().unwrap();
        assert_eq!(schedule.slots(), &[slot(18, 0, 22, 0), slot(7, 0, 9, 0)]);
    }

    #[test]
    fn parse_allows_end_before_start() {
        let schedule: WeekSchedule = "22:00-06:00".parse().unwrap();
        assert_eq!(schedule.slots(), &[slot(22, 0, 6, 0)]);
    }

    #[test]
    fn parse_rejects_missing_dash() {
        assert!(matches!(
            "07:00".parse::<WeekSchedule>(),
            Err(ParseError::MissingRangeSeparator(s)) if s == "07:00"
        ));
    }

    #[test]
    fn parse_rejects_missing_colon() {
        assert!(matches!(
            "0700-0900".parse::<WeekSchedule>(),
            Err(ParseError::MissingTimeSeparator(s)) if s == "0700-0900"
        ));
    }

    #[test]
    fn parse_rejects_double_dash_segment() {
        // The split takes the first '-', so the end side becomes
        // "09:00-11:00" and its minute field fails numeric parsing.
        let result = "07:00-09:00-11:00".parse::<WeekSchedule>();
        assert!(matches!(
            result,
            Err(ParseError::InvalidNumber { field, .. }) if field == "00-11:00"
        ));
    }

    #[test]
    fn parse_rejects_non_numeric_fields() {
        assert!(matches!(
            "ab:00-09:00".parse::<WeekSchedule>(),
            Err(ParseError::InvalidNumber { field, .. }) if field == "ab"
        ));
    }

    #[test]
    fn parse_rejects_out_of_range_times() {
        for input in ["25:00-09:00", "07:60-09:00", "07:00-24:00", "07:00-09:60"] {
            assert!(
                matches!(
                    input.parse::<WeekSchedule>(),
                    Err(ParseError::TimeOutOfRange(_))
                ),
                "input {input:?} should be out of range"
            );
        }
    }

    #[test]
    fn parse_rejects_whole_input_on_late_error() {
        // Second segment is bad: nothing of the first may leak through.
        let result = "07:00-09:00, bogus".parse::<WeekSchedule>();
        assert!(result.is_err());
    }

    // -------------------------------------------------------------------------
    // Round trips
    // -------------------------------------------------------------------------

    #[test]
    fn decode_of_encode_reproduces_display() {
        let cases = [
            WeekSchedule::empty(),
            WeekSchedule::new(vec![slot(7, 0, 9, 0)]).unwrap(),
            WeekSchedule::new(vec![slot(7, 0, 9, 0), slot(18, 0, 22, 0)]).unwrap(),
            WeekSchedule::new(vec![
                slot(0, 0, 5, 59),
                slot(10, 30, 11, 45),
                slot(23, 0, 23, 59),
            ])
            .unwrap(),
        ];
        for schedule in cases {
            let decoded = WeekSchedule::from_wire(&schedule.to_wire()).unwrap();
            assert_eq!(decoded.to_string(), schedule.to_string());
        }
    }

    #[test]
    fn parse_encode_decode_is_identity_on_display_strings() {
        for display in ["0", "07:00-09:00", "07:00-09:00, 18:00-22:00"] {
            let parsed: WeekSchedule = display.parse().unwrap();
            let decoded = WeekSchedule::from_wire(&parsed.to_wire()).unwrap();
            assert_eq!(decoded.to_string(), display);
        }
    }
}
