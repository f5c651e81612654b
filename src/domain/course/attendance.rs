//! Attendance rate value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

use super::CourseError;

/// Fraction of enrolled students that attended a session.
///
/// # Invariants
///
/// - `total > 0`
/// - `attended <= total`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRate {
    attended: usize,
    total: usize,
}

impl AttendanceRate {
    /// Creates a rate from attendee and roster counts.
    ///
    /// # Errors
    ///
    /// - `EmptyRoster` if `total` is zero
    /// - `InvalidArgument` if `attended` exceeds `total`
    pub fn new(attended: usize, total: usize) -> Result<Self, CourseError> {
        if total == 0 {
            return Err(CourseError::EmptyRoster);
        }
        if attended > total {
            return Err(CourseError::invalid_argument(
                "attended",
                format!("{} attendees exceed roster of {}", attended, total),
            ));
        }
        Ok(Self { attended, total })
    }

    /// Number of students who attended.
    pub fn attended(&self) -> usize {
        self.attended
    }

    /// Number of enrolled students.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the rate as a fraction in `[0, 1]`.
    pub fn as_fraction(&self) -> f64 {
        self.attended as f64 / self.total as f64
    }

    /// Returns the rate rounded to a whole percentage.
    pub fn as_percentage(&self) -> Percentage {
        Percentage::from_fraction(self.as_fraction())
    }
}

impl fmt::Display for AttendanceRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.attended, self.total, self.as_percentage())
    }
}
