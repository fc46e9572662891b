use chrono::NaiveTime;
use medsched_client::mock::MockScheduleBackend;
use medsched_client::{AddOutcome, ScheduleService};
use medsched_core::errors::{FieldErrors, ScheduleError};
use medsched_core::form::ScheduleForm;
use medsched_core::models::schedule::EntryId;
use pretty_assertions::assert_eq;
use serde_json::json;

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

fn tuesday_form() -> ScheduleForm {
    ScheduleForm {
        day_of_week: Some(2),
        start_time: time(9, 0),
        end_time: time(17, 0),
        ..ScheduleForm::default()
    }
}

#[tokio::test]
async fn confirmed_add_appends_exactly_one_entry() {
    let mut backend = MockScheduleBackend::new();
    backend
        .expect_create_schedule()
        .withf(|payload| {
            payload.day_of_week == 2
                && payload.is_working_day
                && payload.start_time == "09:00:00"
                && payload.end_time == "17:00:00"
                && payload.appointment_duration == 30
        })
        .times(1)
        .returning(|payload| {
            // Backend echoes the submitted entry with its assigned id.
            Ok(json!({
                "id": 5,
                "day_of_week": payload.day_of_week,
                "is_working_day": payload.is_working_day,
                "start_time": payload.start_time.clone(),
                "end_time": payload.end_time.clone(),
                "appointment_duration": payload.appointment_duration
            }))
        });
    backend.expect_fetch_schedules().times(0);

    let mut service = ScheduleService::new(backend);
    let outcome = service.add(tuesday_form()).await.expect("add succeeds");

    assert_eq!(outcome, AddOutcome::Confirmed);
    assert_eq!(service.entries().len(), 1);

    let entry = &service.entries()[0];
    assert_eq!(entry.id, Some(EntryId::Num(5)));
    assert_eq!(entry.day_of_week, 2);
    assert_eq!(entry.start_time, time(9, 0));
    assert_eq!(entry.end_time, time(17, 0));
    assert_eq!(entry.appointment_duration, 30);
    assert!(!service.is_busy());
}

#[tokio::test]
async fn invalid_form_never_reaches_the_backend() {
    let mut backend = MockScheduleBackend::new();
    backend.expect_create_schedule().times(0);
    backend.expect_fetch_schedules().times(0);

    let form = ScheduleForm {
        end_time: time(9, 0),
        ..tuesday_form()
    };

    let mut service = ScheduleService::new(backend);
    let error = service.add(form).await.expect_err("validation rejects");

    assert!(matches!(error, ScheduleError::Validation(_)));
    assert!(error.to_string().contains("End time must be after start time"));
    assert!(service.entries().is_empty());
    assert!(!service.is_busy());
}

#[tokio::test]
async fn backend_rejection_leaves_the_store_unchanged() {
    let mut backend = MockScheduleBackend::new();
    backend.expect_create_schedule().times(1).returning(|_| {
        let mut errors = FieldErrors::new();
        errors.push_all("day_of_week", vec!["required".to_string()]);
        Err(ScheduleError::Rejected(errors))
    });

    let mut service = ScheduleService::new(backend);
    let error = service.add(tuesday_form()).await.expect_err("backend rejects");

    assert!(error.to_string().contains("day_of_week: required"));
    assert!(service.entries().is_empty());
    assert!(!service.is_busy());
}

#[tokio::test]
async fn unconfirmed_add_refetches_the_list() {
    let mut backend = MockScheduleBackend::new();
    backend
        .expect_create_schedule()
        .times(1)
        .returning(|_| Ok(json!({})));
    backend.expect_fetch_schedules().times(1).returning(|| {
        Ok(json!([
            {"id": 1, "day_of_week": 0, "start_time": "09:00:00", "end_time": "17:00:00"},
            {"id": 2, "day_of_week": 2, "start_time": "09:00:00", "end_time": "17:00:00"}
        ]))
    });

    let mut service = ScheduleService::new(backend);
    let outcome = service.add(tuesday_form()).await.expect("add succeeds");

    assert_eq!(outcome, AddOutcome::Refetched);
    assert_eq!(service.entries().len(), 2);
    assert!(!service.is_busy());
}

#[tokio::test]
async fn delete_removes_only_the_matching_entry() {
    let mut backend = MockScheduleBackend::new();
    backend.expect_fetch_schedules().times(1).returning(|| {
        Ok(json!([
            {"id": 1, "day_of_week": 0},
            {"id": 2, "day_of_week": 1},
            {"id": 3, "day_of_week": 2}
        ]))
    });
    backend
        .expect_delete_schedule()
        .withf(|id| *id == EntryId::Num(2))
        .times(1)
        .returning(|_| Ok(()));

    let mut service = ScheduleService::new(backend);
    service.refresh().await.expect("refresh succeeds");
    service
        .remove(&EntryId::Num(2))
        .await
        .expect("delete succeeds");

    let ids: Vec<_> = service.entries().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec![Some(EntryId::Num(1)), Some(EntryId::Num(3))]);
    assert!(!service.is_busy());
}

#[tokio::test]
async fn failed_delete_keeps_the_entry() {
    let mut backend = MockScheduleBackend::new();
    backend.expect_fetch_schedules().times(1).returning(|| {
        Ok(json!([
            {"id": 1, "day_of_week": 0},
            {"id": 2, "day_of_week": 1}
        ]))
    });
    backend
        .expect_delete_schedule()
        .times(1)
        .returning(|_| Err(ScheduleError::Backend("Schedule not found".to_string())));

    let mut service = ScheduleService::new(backend);
    service.refresh().await.expect("refresh succeeds");

    let error = service
        .remove(&EntryId::Num(2))
        .await
        .expect_err("delete fails");

    assert_eq!(error.to_string(), "Schedule not found");
    assert_eq!(service.entries().len(), 2);
    assert!(!service.is_busy());
}

#[tokio::test]
async fn refresh_normalizes_wrapped_response_shapes() {
    let mut backend = MockScheduleBackend::new();
    backend.expect_fetch_schedules().times(1).returning(|| {
        Ok(json!({
            "results": [
                {"id": 4, "day_of_week": 3, "start_time": "08:30:00", "end_time": "12:00:00"}
            ]
        }))
    });

    let mut service = ScheduleService::new(backend);
    service.refresh().await.expect("refresh succeeds");

    assert_eq!(service.entries().len(), 1);
    let entry = &service.entries()[0];
    assert_eq!(entry.id, Some(EntryId::Num(4)));
    assert_eq!(entry.start_time, time(8, 30));
    assert!(entry.is_working_day);
    assert_eq!(entry.appointment_duration, 30);
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_list() {
    let mut backend = MockScheduleBackend::new();
    let mut seq = mockall::Sequence::new();
    backend
        .expect_fetch_schedules()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(json!([{"id": 1, "day_of_week": 0}])));
    backend
        .expect_fetch_schedules()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(ScheduleError::Backend("Failed to fetch schedules".to_string())));

    let mut service = ScheduleService::new(backend);
    service.refresh().await.expect("first refresh succeeds");
    let error = service.refresh().await.expect_err("second refresh fails");

    assert_eq!(error.to_string(), "Failed to fetch schedules");
    assert_eq!(service.entries().len(), 1);
    assert!(!service.is_busy());
}
