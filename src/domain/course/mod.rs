//! Course domain module.
//!
//! Tracks a course's roster of students and its schedule of class sessions,
//! and answers attendance questions about them.
//!
//! # Events
//!
//! - `Created` - Recorded when a new course is created
//! - `StudentEnrolled` - Recorded when a student joins the roster
//! - `SessionScheduled` - Recorded when a session is first scheduled

mod aggregate;
mod attendance;
mod class_session;
mod errors;
mod events;
mod student;

pub use aggregate::Course;
pub use attendance::AttendanceRate;
pub use class_session::ClassSession;
pub use errors::CourseError;
pub use events::CourseEvent;
pub use student::{Student, StudentRecord};
