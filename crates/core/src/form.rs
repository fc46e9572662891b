use chrono::NaiveTime;

use crate::errors::{FieldErrors, ScheduleError, ScheduleResult};
use crate::models::schedule::{
    CreateSchedulePayload, DAY_NAMES, DEFAULT_APPOINTMENT_MINUTES, MAX_APPOINTMENT_MINUTES,
    MIN_APPOINTMENT_MINUTES, TIME_FORMAT,
};

/// Start time substituted when the form leaves it empty.
pub const DEFAULT_START_TIME: &str = "09:00:00";
/// End time substituted when the form leaves it empty.
pub const DEFAULT_END_TIME: &str = "17:00:00";

/// Raw values captured from the add-schedule form.
///
/// Optional fields model what the user may leave blank; defaults mirror
/// the form's initial state (working day on, 30 minute appointments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    pub day_of_week: Option<u8>,
    pub is_working_day: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub appointment_duration: Option<u32>,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            day_of_week: None,
            is_working_day: true,
            start_time: None,
            end_time: None,
            appointment_duration: Some(DEFAULT_APPOINTMENT_MINUTES),
        }
    }
}

impl ScheduleForm {
    /// Validates the form and maps it into the wire payload.
    ///
    /// All failing fields are collected into one [`ScheduleError::Validation`]
    /// so the caller can render every problem at once. The end-after-start
    /// rule is only evaluated when both times are present and attaches its
    /// message to the end-time field.
    pub fn into_payload(self) -> ScheduleResult<CreateSchedulePayload> {
        let mut errors = FieldErrors::new();

        match self.day_of_week {
            None => errors.push("day_of_week", "Please select a day"),
            Some(day) if day as usize >= DAY_NAMES.len() => {
                errors.push("day_of_week", "Day must be between Monday and Sunday")
            }
            Some(_) => {}
        }

        if self.is_working_day {
            if self.start_time.is_none() {
                errors.push("start_time", "Please enter start time");
            }
            if self.end_time.is_none() {
                errors.push("end_time", "Please enter end time");
            }
            if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
                if end <= start {
                    errors.push("end_time", "End time must be after start time");
                }
            }

            let duration_message = format!(
                "Please enter duration between {}-{} minutes",
                MIN_APPOINTMENT_MINUTES, MAX_APPOINTMENT_MINUTES
            );
            match self.appointment_duration {
                None => errors.push("appointment_duration", duration_message),
                Some(minutes)
                    if !(MIN_APPOINTMENT_MINUTES..=MAX_APPOINTMENT_MINUTES)
                        .contains(&minutes) =>
                {
                    errors.push("appointment_duration", duration_message)
                }
                Some(_) => {}
            }
        }

        if !errors.is_empty() {
            return Err(ScheduleError::Validation(errors));
        }

        // Time defaults apply even for non-working days; the backend expects
        // time strings unconditionally.
        Ok(CreateSchedulePayload {
            day_of_week: self.day_of_week.unwrap_or(0),
            is_working_day: self.is_working_day,
            start_time: serialize_time(self.start_time, DEFAULT_START_TIME),
            end_time: serialize_time(self.end_time, DEFAULT_END_TIME),
            appointment_duration: self
                .appointment_duration
                .unwrap_or(DEFAULT_APPOINTMENT_MINUTES),
        })
    }
}

fn serialize_time(time: Option<NaiveTime>, default: &str) -> String {
    match time {
        Some(time) => time.format(TIME_FORMAT).to_string(),
        None => default.to_string(),
    }
}
