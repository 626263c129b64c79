//! Repository layer: one zero-sized struct per table exposing async queries.

pub mod reading_repo;

pub use reading_repo::ReadingRepo;
