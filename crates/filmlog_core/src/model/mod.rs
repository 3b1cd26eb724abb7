//! Domain value records for the catalog.
//!
//! # Responsibility
//! - Define the Genre and Movie records returned by the repository layer.
//!
//! # Invariants
//! - Records are plain values; they hold no connection or cache state.
//! - `id == 0` marks a record that has not been persisted yet.

pub mod genre;
pub mod movie;
