use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

use medsched_core::errors::{ScheduleError, ScheduleResult};
use medsched_core::models::schedule::{CreateSchedulePayload, EntryId};

use crate::api::{ScheduleApi, failure_message, rejection};
use crate::config::ClientConfig;

/// reqwest-backed [`ScheduleApi`] for the appointment backend.
///
/// The bearer token is injected at construction; this type never acquires
/// or refreshes tokens itself. No request timeout is configured, so a hung
/// request holds its operation open until the transport gives up.
pub struct HttpScheduleApi {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpScheduleApi {
    pub fn new(config: &ClientConfig, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
            token: token.into(),
        }
    }

    fn schedule_url(&self) -> String {
        format!("{}/api/appointments/doctor/schedule/", self.base_url)
    }

    fn entry_url(&self, id: &EntryId) -> String {
        format!("{}{}/", self.schedule_url(), id)
    }

    /// Body of a failed response, `Null` when it is empty or not JSON.
    async fn error_body(response: reqwest::Response) -> Value {
        response.json().await.unwrap_or(Value::Null)
    }

    /// Body of a successful response, `Null` when it is empty or not JSON.
    /// A create response without a JSON body is a valid
    /// "created but unconfirmed" outcome, not a transport error.
    async fn success_body(response: reqwest::Response) -> ScheduleResult<Value> {
        let text = response.text().await.map_err(transport)?;
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }
}

#[async_trait]
impl ScheduleApi for HttpScheduleApi {
    async fn fetch_schedules(&self) -> ScheduleResult<Value> {
        let response = self
            .http
            .get(self.schedule_url())
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = Self::error_body(response).await;
            warn!(%status, "schedule list request failed");
            let message =
                failure_message(&body).unwrap_or_else(|| "Failed to fetch schedules".to_string());
            return Err(ScheduleError::Backend(message));
        }

        Self::success_body(response).await
    }

    async fn create_schedule(&self, payload: &CreateSchedulePayload) -> ScheduleResult<Value> {
        let response = self
            .http
            .post(self.schedule_url())
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = Self::error_body(response).await;
            warn!(%status, "schedule create request rejected");
            return Err(match rejection(&body) {
                Some(errors) => ScheduleError::Rejected(errors),
                None => ScheduleError::Backend(
                    failure_message(&body).unwrap_or_else(|| "Failed to add schedule".to_string()),
                ),
            });
        }

        Self::success_body(response).await
    }

    async fn delete_schedule(&self, id: &EntryId) -> ScheduleResult<()> {
        let response = self
            .http
            .delete(self.entry_url(id))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = Self::error_body(response).await;
            warn!(%status, %id, "schedule delete request failed");
            let message =
                failure_message(&body).unwrap_or_else(|| "Failed to delete schedule".to_string());
            return Err(ScheduleError::Backend(message));
        }

        Ok(())
    }
}

fn transport(err: reqwest::Error) -> ScheduleError {
    ScheduleError::Transport(eyre::Report::new(err))
}
