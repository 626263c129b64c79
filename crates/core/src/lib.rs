//! Gaswatch domain types and rules.
//!
//! Pure logic shared by the storage, notification and HTTP crates:
//! reading validation, the leak alert rule, valve state parsing and the
//! common error type.

pub mod alert;
pub mod error;
pub mod reading;
pub mod types;
pub mod valve;
