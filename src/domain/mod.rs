//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `course` - Course aggregate: roster, class sessions and attendance

pub mod course;
pub mod foundation;
