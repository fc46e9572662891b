use std::fmt;

use thiserror::Error;

/// Error messages keyed by the form or payload field they apply to.
///
/// Field order is preserved so messages render in the order the backend
/// (or the validator) produced them. Multiple messages for one field are
/// joined with commas when displayed, one line per field:
///
/// ```text
/// day_of_week: required
/// end_time: End time must be after start time
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single message for `field`, creating the field slot if needed.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.0.push((field, vec![message])),
        }
    }

    /// Adds all `messages` under `field`.
    pub fn push_all(&mut self, field: impl Into<String>, messages: Vec<String>) {
        let field = field.into();
        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => existing.extend(messages),
            None => self.0.push((field, messages)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, messages)) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
        }
        Ok(())
    }
}

/// Errors surfaced by schedule operations.
///
/// Backend failures are split by how much structure the response carried:
/// a field-keyed map becomes [`ScheduleError::Rejected`], a plain
/// `message`/`detail` body becomes [`ScheduleError::Backend`], and anything
/// below the HTTP layer becomes [`ScheduleError::Transport`].
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid schedule entry:\n{0}")]
    Validation(FieldErrors),

    #[error("Validation errors:\n{0}")]
    Rejected(FieldErrors),

    #[error("{0}")]
    Backend(String),

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Another operation is in progress")]
    Busy,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
