//! Database row models.
//!
//! Creation input lives in `gaswatch_core::reading::NewReading`; rows are
//! never updated, so there are no update DTOs.

pub mod reading;
