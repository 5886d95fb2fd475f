//! Domain models for study groups.
//!
//! These are the core types shared across all crates.

pub mod study_group;
pub mod user;
