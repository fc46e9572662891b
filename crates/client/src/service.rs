use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use medsched_core::errors::{ScheduleError, ScheduleResult};
use medsched_core::form::ScheduleForm;
use medsched_core::models::schedule::{EntryId, ScheduleEntry};
use medsched_core::normalize::{created_entry, normalize_list};
use medsched_core::store::ScheduleStore;

use crate::api::ScheduleApi;

/// How a successful add was reflected in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The backend echoed the created entry and it was appended.
    Confirmed,
    /// The backend confirmed creation without an entry payload; the whole
    /// list was refetched instead.
    Refetched,
}

/// Drives the schedule operations and owns the session store.
///
/// One operation runs at a time: each of [`refresh`](Self::refresh),
/// [`add`](Self::add), and [`remove`](Self::remove) holds the busy guard
/// for its duration and a concurrent attempt gets [`ScheduleError::Busy`].
/// The store is only mutated after the backend confirmed the operation, so
/// a failure leaves the previous state intact.
pub struct ScheduleService<A> {
    api: A,
    store: ScheduleStore,
    busy: Arc<AtomicBool>,
}

/// Scoped "operation in progress" marker. Dropping it releases the flag on
/// every exit path, including panics and early returns.
struct OpGuard {
    flag: Arc<AtomicBool>,
}

impl OpGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> ScheduleResult<Self> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ScheduleError::Busy);
        }
        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for OpGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<A: ScheduleApi> ScheduleService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: ScheduleStore::new(),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current entries, in arrival/insertion order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        self.store.entries()
    }

    /// Whether an operation currently holds the busy guard.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Replaces the store with the backend's current list.
    pub async fn refresh(&mut self) -> ScheduleResult<()> {
        let _guard = OpGuard::acquire(&self.busy)?;
        self.reload().await
    }

    /// Validates the form, posts it, and records the created entry.
    ///
    /// Validation failures are returned before any network call. When the
    /// create response carries no entry payload the list is refetched
    /// within the same operation.
    pub async fn add(&mut self, form: ScheduleForm) -> ScheduleResult<AddOutcome> {
        let payload = form.into_payload()?;
        let _guard = OpGuard::acquire(&self.busy)?;

        let body = self.api.create_schedule(&payload).await?;
        match created_entry(&body) {
            Some(entry) => {
                info!(day = payload.day_of_week, "schedule entry added");
                self.store.append(entry);
                Ok(AddOutcome::Confirmed)
            }
            None => {
                warn!("create response carried no entry payload, refetching list");
                self.reload().await?;
                Ok(AddOutcome::Refetched)
            }
        }
    }

    /// Deletes the entry with the given id and removes it from the store.
    pub async fn remove(&mut self, id: &EntryId) -> ScheduleResult<()> {
        let _guard = OpGuard::acquire(&self.busy)?;

        self.api.delete_schedule(id).await?;
        self.store.remove(id);
        info!(%id, "schedule entry deleted");
        Ok(())
    }

    // Shared by refresh and the unconfirmed-add fallback; runs under the
    // caller's guard.
    async fn reload(&mut self) -> ScheduleResult<()> {
        let body = self.api.fetch_schedules().await?;
        self.store.replace(normalize_list(&body));
        Ok(())
    }
}
