//! # MedSched Client
//!
//! Client-side operations for a doctor's weekly schedule screen: fetch the
//! current list, add an entry from validated form input, and delete an
//! entry, all against the appointment REST backend.
//!
//! ## Architecture
//!
//! - **Api**: the [`api::ScheduleApi`] trait is the seam to the backend;
//!   [`api::http::HttpScheduleApi`] implements it with reqwest and bearer
//!   authorization.
//! - **Service**: [`service::ScheduleService`] drives operations, owns the
//!   in-memory store, and holds the single-operation busy guard.
//! - **Config**: environment-driven settings for the backend base URL.
//!
//! The pure domain logic (models, normalization, validation, store) lives
//! in `medsched-core`.

/// Backend trait and its reqwest implementation
pub mod api;
/// Environment configuration for the client
pub mod config;
/// Mock backend for tests
pub mod mock;
/// Operation layer tying the backend to the in-memory store
pub mod service;

pub use service::{AddOutcome, ScheduleService};
