//! # MedSched Core
//!
//! Domain types and pure logic for managing a doctor's weekly working-hour
//! schedule. This crate has no I/O: it defines the entry model, coerces
//! loosely-shaped backend payloads into that model, validates form input
//! into the wire format, and keeps the in-memory session list of entries.
//!
//! The HTTP side lives in the companion `medsched-client` crate.

/// Error types shared across the schedule components
pub mod errors;
/// Form input and its validation into the wire payload
pub mod form;
/// Domain model types
pub mod models;
/// Coercion of backend response shapes into typed entries
pub mod normalize;
/// In-memory session store for schedule entries
pub mod store;
