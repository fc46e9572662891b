use async_trait::async_trait;
use serde_json::Value;

use medsched_core::errors::{FieldErrors, ScheduleResult};
use medsched_core::models::schedule::{CreateSchedulePayload, EntryId};

pub mod http;

/// Seam to the schedule backend.
///
/// List and create calls return the raw response body because the backend's
/// shapes vary by deployment; normalization into typed entries happens in
/// `medsched-core::normalize`, above this trait.
#[async_trait]
pub trait ScheduleApi {
    /// Fetches the full schedule list.
    async fn fetch_schedules(&self) -> ScheduleResult<Value>;

    /// Posts a new schedule entry.
    async fn create_schedule(&self, payload: &CreateSchedulePayload) -> ScheduleResult<Value>;

    /// Requests removal of the entry with the given id.
    async fn delete_schedule(&self, id: &EntryId) -> ScheduleResult<()>;
}

/// Interprets an error body as a field-keyed rejection map.
///
/// Every key becomes a field; array values keep their individual messages,
/// anything else becomes a single message. Returns `None` for bodies that
/// are not non-empty objects, in which case the caller falls back to a
/// generic failure message.
pub fn rejection(body: &Value) -> Option<FieldErrors> {
    let map = body.as_object()?;
    if map.is_empty() {
        return None;
    }

    let mut errors = FieldErrors::new();
    for (field, value) in map {
        match value {
            Value::Array(items) => {
                let messages = items
                    .iter()
                    .map(|item| match item {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                errors.push_all(field.clone(), messages);
            }
            Value::String(text) => errors.push(field.clone(), text.clone()),
            other => errors.push(field.clone(), other.to_string()),
        }
    }
    Some(errors)
}

/// Most specific failure message in an error body: `message`, then `detail`.
pub fn failure_message(body: &Value) -> Option<String> {
    for key in ["message", "detail"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }
    None
}
