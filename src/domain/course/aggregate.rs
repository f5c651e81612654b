//! Course aggregate - roster, schedule and attendance queries.
//!
//! # Ownership
//!
//! A course owns the enrollment relationship and its schedule, but not the
//! students themselves. Students are shared through `Arc<dyn Student>` and
//! are never copied.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::foundation::{CourseId, StudentId, Timestamp, ValidationError};

use super::{AttendanceRate, ClassSession, CourseError, CourseEvent, Student};

/// Course aggregate - a named course with its roster and class schedule.
///
/// # Invariants
///
/// - `name` is non-blank
/// - no two enrolled students share an identification
/// - no session is scheduled twice
/// - `students` and `sessions` keep insertion order and only grow
#[derive(Debug, Clone)]
pub struct Course {
    id: CourseId,
    name: String,
    /// Enrolled students, in enrollment order.
    students: Vec<Arc<dyn Student>>,
    /// Identification -> position in `students`.
    roster_index: HashMap<StudentId, usize>,
    /// Scheduled sessions, in first-scheduled order.
    sessions: Vec<ClassSession>,
    scheduled: HashSet<ClassSession>,
    created_at: Timestamp,
    domain_events: Vec<CourseEvent>,
}

impl Course {
    /// Create a new course with an empty roster and schedule.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if name is blank
    pub fn new(name: impl Into<String>) -> Result<Self, CourseError> {
        let name = name.into();
        Self::validate_name(&name)?;

        let id = CourseId::new();
        let now = Timestamp::now();
        let mut course = Self {
            id,
            name: name.clone(),
            students: Vec::new(),
            roster_index: HashMap::new(),
            sessions: Vec::new(),
            scheduled: HashSet::new(),
            created_at: now,
            domain_events: Vec::new(),
        };

        course.record_event(CourseEvent::Created {
            course_id: id,
            name,
            created_at: now,
        });

        Ok(course)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the course ID.
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Returns the course name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the course was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns enrolled students in enrollment order.
    pub fn students(&self) -> &[Arc<dyn Student>] {
        &self.students
    }

    /// Returns the number of enrolled students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Returns scheduled sessions in the order they were first scheduled.
    pub fn sessions(&self) -> &[ClassSession] {
        &self.sessions
    }

    /// Returns the number of scheduled sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Checks whether `session` is on the schedule.
    pub fn is_scheduled(&self, session: &ClassSession) -> bool {
        self.scheduled.contains(session)
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<CourseEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Roster
    // ─────────────────────────────────────────────────────────────────────────

    /// Enroll a student.
    ///
    /// # Errors
    ///
    /// - `DuplicateIdentification` if the identification is already enrolled.
    ///   The roster is left untouched.
    pub fn enroll(&mut self, student: Arc<dyn Student>) -> Result<(), CourseError> {
        let student_id = student.identification().clone();
        if self.roster_index.contains_key(&student_id) {
            return Err(CourseError::duplicate_identification(student_id));
        }

        self.roster_index.insert(student_id.clone(), self.students.len());
        self.students.push(student);

        self.record_event(CourseEvent::StudentEnrolled {
            course_id: self.id,
            student_id,
        });
        Ok(())
    }

    /// Finds the enrolled student with this identification.
    pub fn find_student(&self, identification: &str) -> Option<&Arc<dyn Student>> {
        self.roster_index
            .get(identification)
            .and_then(|&idx| self.students.get(idx))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Schedule
    // ─────────────────────────────────────────────────────────────────────────

    /// Schedule a session. Scheduling an existing session is a no-op.
    ///
    /// Returns true if the session was newly added.
    pub fn schedule_session(&mut self, session: ClassSession) -> bool {
        if !self.scheduled.insert(session) {
            return false;
        }

        self.sessions.push(session);
        self.record_event(CourseEvent::SessionScheduled {
            course_id: self.id,
            session,
        });
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attendance
    // ─────────────────────────────────────────────────────────────────────────

    /// Students who attended `session`, in enrollment order.
    ///
    /// The session does not need to be scheduled.
    pub fn attendees(&self, session: &ClassSession) -> Vec<Arc<dyn Student>> {
        self.partition_by_attendance(session).0
    }

    /// Students who did not attend `session`, in enrollment order.
    pub fn absentees(&self, session: &ClassSession) -> Vec<Arc<dyn Student>> {
        self.partition_by_attendance(session).1
    }

    /// Splits the roster into (attendees, absentees) for `session`.
    pub fn partition_by_attendance(
        &self,
        session: &ClassSession,
    ) -> (Vec<Arc<dyn Student>>, Vec<Arc<dyn Student>>) {
        self.students
            .iter()
            .cloned()
            .partition(|student| student.attended_session(session))
    }

    /// Fraction of enrolled students who attended `session`.
    ///
    /// # Errors
    ///
    /// - `EmptyRoster` if no students are enrolled
    pub fn attendance_rate(&self, session: &ClassSession) -> Result<AttendanceRate, CourseError> {
        let attended = self
            .students
            .iter()
            .filter(|student| student.attended_session(session))
            .count();
        AttendanceRate::new(attended, self.students.len())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn record_event(&mut self, event: CourseEvent) {
        self.domain_events.push(event);
    }

    /// Validates the course name.
    fn validate_name(name: &str) -> Result<(), CourseError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        Ok(())
    }
}
