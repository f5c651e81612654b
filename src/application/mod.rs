//! Application layer - Queries over the course aggregate.
//!
//! This layer turns domain answers into serializable reports and is where
//! logging happens; the aggregate itself stays silent.

mod attendance_report;

pub use attendance_report::{AttendanceReporter, CourseReport, SessionReport};
