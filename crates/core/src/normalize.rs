//! Coercion of backend response bodies into typed schedule entries.
//!
//! The backend is not consistent about its list shape: depending on the
//! deployment it returns a bare array, a paginated `{results: [...]}`
//! wrapper, a `{schedules: [...]}` wrapper, or an object keyed by some id.
//! Everything here is a pure function over `serde_json::Value` so the
//! behavior stays testable without a transport.

use chrono::NaiveTime;
use serde_json::Value;

use crate::models::schedule::{DEFAULT_APPOINTMENT_MINUTES, EntryId, ScheduleEntry, TIME_FORMAT};

/// Coerces any recognized list-response shape into schedule entries.
///
/// Shape candidates are tried in priority order: bare array, `results`
/// array, `schedules` array, then the enumerable values of an object.
/// Unrecognized bodies degrade to an empty list; element order is the
/// arrival order of the underlying sequence.
pub fn normalize_list(body: &Value) -> Vec<ScheduleEntry> {
    raw_elements(body).into_iter().map(normalize_entry).collect()
}

fn raw_elements(body: &Value) -> Vec<&Value> {
    if let Value::Array(items) = body {
        return items.iter().collect();
    }
    for key in ["results", "schedules"] {
        if let Some(Value::Array(items)) = body.get(key) {
            return items.iter().collect();
        }
    }
    if let Value::Object(map) = body {
        return map.values().collect();
    }
    Vec::new()
}

/// Coerces one raw element into a [`ScheduleEntry`].
///
/// The identifier falls back from `id` to the legacy `_id`;
/// `is_working_day` is true unless explicitly `false`; times are parsed
/// from `HH:mm:ss` text and left absent when missing or unparsable.
pub fn normalize_entry(raw: &Value) -> ScheduleEntry {
    ScheduleEntry {
        id: entry_id(raw),
        day_of_week: raw
            .get("day_of_week")
            .and_then(Value::as_u64)
            .map(|day| day as u8)
            .unwrap_or(0),
        is_working_day: raw.get("is_working_day").and_then(Value::as_bool) != Some(false),
        start_time: time_field(raw, "start_time"),
        end_time: time_field(raw, "end_time"),
        appointment_duration: raw
            .get("appointment_duration")
            .and_then(Value::as_u64)
            .map(|minutes| minutes as u32)
            .unwrap_or(DEFAULT_APPOINTMENT_MINUTES),
    }
}

/// Pulls the created entry out of a create-response body, if one is present.
///
/// The backend either echoes the entry directly or nests it under `data`.
/// Only a non-empty JSON object counts as an entry payload; anything else
/// means the creation succeeded without confirmation and the caller should
/// refetch the list.
pub fn created_entry(body: &Value) -> Option<ScheduleEntry> {
    let candidate = match body.get("data") {
        Some(data) if data.is_object() => data,
        _ => body,
    };
    match candidate {
        Value::Object(map) if !map.is_empty() => Some(normalize_entry(candidate)),
        _ => None,
    }
}

fn entry_id(raw: &Value) -> Option<EntryId> {
    for key in ["id", "_id"] {
        match raw.get(key) {
            Some(Value::Number(n)) => {
                if let Some(id) = n.as_i64() {
                    return Some(EntryId::Num(id));
                }
            }
            Some(Value::String(s)) => return Some(EntryId::Text(s.clone())),
            _ => {}
        }
    }
    None
}

fn time_field(raw: &Value, key: &str) -> Option<NaiveTime> {
    raw.get(key)
        .and_then(Value::as_str)
        .and_then(|text| NaiveTime::parse_from_str(text, TIME_FORMAT).ok())
}
