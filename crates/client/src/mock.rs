use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use medsched_core::errors::ScheduleResult;
use medsched_core::models::schedule::{CreateSchedulePayload, EntryId};

use crate::api::ScheduleApi;

// Mock backend for testing
mock! {
    pub ScheduleBackend {}

    #[async_trait]
    impl ScheduleApi for ScheduleBackend {
        async fn fetch_schedules(&self) -> ScheduleResult<Value>;
        async fn create_schedule(&self, payload: &CreateSchedulePayload) -> ScheduleResult<Value>;
        async fn delete_schedule(&self, id: &EntryId) -> ScheduleResult<()>;
    }
}
