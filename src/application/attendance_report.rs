//! AttendanceReporter - Builds attendance reports for a course.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{AttendanceConfig, EmptyRosterPolicy};
use crate::domain::course::{AttendanceRate, ClassSession, Course, CourseError, Student};
use crate::domain::foundation::{CourseId, Percentage, StudentId};

/// Attendance for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub course_id: CourseId,
    pub course_name: String,
    pub session: ClassSession,
    pub attendees: Vec<StudentId>,
    pub absentees: Vec<StudentId>,
    /// Fraction of the roster that attended, in `[0, 1]`.
    pub rate: f64,
}

impl SessionReport {
    /// Returns the rate rounded to a whole percentage.
    pub fn percentage(&self) -> Percentage {
        Percentage::from_fraction(self.rate)
    }
}

/// Attendance for every scheduled session of a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseReport {
    pub course_id: CourseId,
    pub course_name: String,
    pub enrolled: usize,
    pub sessions: Vec<SessionReport>,
    /// Mean session rate; 0.0 when nothing is scheduled.
    pub average_rate: f64,
}

impl CourseReport {
    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds attendance reports, applying the configured empty-roster policy.
#[derive(Debug, Clone, Default)]
pub struct AttendanceReporter {
    config: AttendanceConfig,
}

impl AttendanceReporter {
    pub fn new(config: AttendanceConfig) -> Self {
        Self { config }
    }

    /// Report attendance of `session`, which need not be scheduled.
    ///
    /// # Errors
    ///
    /// - `EmptyRoster` if the roster is empty and the policy is `error`
    pub fn session_report(
        &self,
        course: &Course,
        session: &ClassSession,
    ) -> Result<SessionReport, CourseError> {
        let (attendees, absentees) = course.partition_by_attendance(session);
        let rate = self.rate_for(course, attendees.len())?;

        debug!(
            course_id = %course.id(),
            session = %session,
            attendees = attendees.len(),
            absentees = absentees.len(),
            rate,
            "built session report"
        );

        Ok(SessionReport {
            course_id: course.id(),
            course_name: course.name().to_string(),
            session: *session,
            attendees: identifications(&attendees),
            absentees: identifications(&absentees),
            rate,
        })
    }

    /// Report attendance of every scheduled session, in schedule order.
    ///
    /// # Errors
    ///
    /// - `EmptyRoster` if sessions are scheduled, the roster is empty and the
    ///   policy is `error`
    pub fn course_report(&self, course: &Course) -> Result<CourseReport, CourseError> {
        let sessions = course
            .sessions()
            .iter()
            .map(|session| self.session_report(course, session))
            .collect::<Result<Vec<_>, _>>()?;

        let average_rate = if sessions.is_empty() {
            0.0
        } else {
            sessions.iter().map(|s| s.rate).sum::<f64>() / sessions.len() as f64
        };

        info!(
            course_id = %course.id(),
            enrolled = course.student_count(),
            sessions = sessions.len(),
            average_rate,
            "built course report"
        );

        Ok(CourseReport {
            course_id: course.id(),
            course_name: course.name().to_string(),
            enrolled: course.student_count(),
            sessions,
            average_rate,
        })
    }

    /// Rate from the attendee count of the report's own partition.
    fn rate_for(&self, course: &Course, attended: usize) -> Result<f64, CourseError> {
        match AttendanceRate::new(attended, course.student_count()) {
            Ok(rate) => Ok(rate.as_fraction()),
            Err(CourseError::EmptyRoster) => match self.config.empty_roster {
                EmptyRosterPolicy::Zero => Ok(0.0),
                EmptyRosterPolicy::Error => {
                    warn!(course_id = %course.id(), "attendance rate requested for empty roster");
                    Err(CourseError::EmptyRoster)
                }
            },
            Err(e) => Err(e),
        }
    }
}

fn identifications(students: &[Arc<dyn Student>]) -> Vec<StudentId> {
    students
        .iter()
        .map(|student| student.identification().clone())
        .collect()
}
