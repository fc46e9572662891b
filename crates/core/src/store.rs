use crate::models::schedule::{EntryId, ScheduleEntry};

/// Ordered in-memory list of schedule entries for the current session.
///
/// Order is arrival/insertion order from fetch or append; the store never
/// sorts. Mutation happens only through [`replace`](Self::replace),
/// [`append`](Self::append), and [`remove`](Self::remove), matching the
/// entry lifecycle (fetched, created by a confirmed submit, destroyed by a
/// confirmed delete).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleStore {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly fetched list.
    pub fn replace(&mut self, entries: Vec<ScheduleEntry>) {
        self.entries = entries;
    }

    /// Appends a newly created entry at the end of the list.
    pub fn append(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Removes the first entry whose id matches, preserving the relative
    /// order of the remaining entries.
    pub fn remove(&mut self, id: &EntryId) -> Option<ScheduleEntry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id.as_ref() == Some(id))?;
        Some(self.entries.remove(position))
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
