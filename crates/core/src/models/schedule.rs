use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Wire format for time-of-day fields (`HH:mm:ss`).
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Appointment length applied when the backend or the form omits one.
pub const DEFAULT_APPOINTMENT_MINUTES: u32 = 30;

/// Allowed appointment length range, in minutes.
pub const MIN_APPOINTMENT_MINUTES: u32 = 10;
pub const MAX_APPOINTMENT_MINUTES: u32 = 120;

/// Day names indexed by wire value, Monday = 0 through Sunday = 6.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Display name for a `day_of_week` value, if it is in range.
pub fn day_name(day: u8) -> Option<&'static str> {
    DAY_NAMES.get(day as usize).copied()
}

/// Backend-assigned entry identifier.
///
/// Some deployments return numeric ids, others return string ids (the
/// legacy `_id` field in particular), so both are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Num(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Num(n) => write!(f, "{}", n),
            EntryId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        EntryId::Num(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        EntryId::Text(id.to_string())
    }
}

/// One weekly recurring working/non-working block for a single day.
///
/// The id is `None` only for malformed backend rows that carried neither
/// `id` nor `_id`; such rows are kept rather than dropped so the list
/// still reflects what the backend returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Option<EntryId>,
    pub day_of_week: u8,
    pub is_working_day: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub appointment_duration: u32,
}

/// JSON body for `POST /api/appointments/doctor/schedule/`.
///
/// Times are pre-serialized strings because the backend expects `HH:mm:ss`
/// text unconditionally, defaults included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSchedulePayload {
    pub day_of_week: u8,
    pub is_working_day: bool,
    pub start_time: String,
    pub end_time: String,
    pub appointment_duration: u32,
}
