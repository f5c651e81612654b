//! Course Roster - In-memory course roster and attendance tracking
//!
//! This crate models a course's enrolled students, its scheduled class
//! sessions and per-session attendance, and derives attendee/absentee
//! lists and attendance rates from them.

pub mod application;
pub mod config;
pub mod domain;
