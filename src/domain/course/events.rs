//! Course domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, StudentId, Timestamp};

use super::ClassSession;

/// Events recorded by the course aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseEvent {
    /// A new course was created.
    Created {
        course_id: CourseId,
        name: String,
        created_at: Timestamp,
    },

    /// A student joined the roster.
    StudentEnrolled {
        course_id: CourseId,
        student_id: StudentId,
    },

    /// A session was added to the schedule.
    SessionScheduled {
        course_id: CourseId,
        session: ClassSession,
    },
}

impl CourseEvent {
    /// Returns the event type string used for routing.
    pub fn event_type(&self) -> &'static str {
        match self {
            CourseEvent::Created { .. } => "course.created",
            CourseEvent::StudentEnrolled { .. } => "course.student_enrolled",
            CourseEvent::SessionScheduled { .. } => "course.session_scheduled",
        }
    }

    /// Returns the ID of the course that recorded the event.
    pub fn course_id(&self) -> CourseId {
        match self {
            CourseEvent::Created { course_id, .. }
            | CourseEvent::StudentEnrolled { course_id, .. }
            | CourseEvent::SessionScheduled { course_id, .. } => *course_id,
        }
    }
}
