//! Student capability consumed by the course aggregate.
//!
//! The course never owns student identity. It only needs to know who a
//! student is and whether they attended a given session, so any type
//! answering those two questions can be enrolled.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::{StudentId, ValidationError};

use super::ClassSession;

/// A student as seen by a course.
pub trait Student: Send + Sync + fmt::Debug {
    /// Identification, unique within a course.
    fn identification(&self) -> &StudentId;

    /// Whether this student attended `session`.
    fn attended_session(&self, session: &ClassSession) -> bool;
}

/// In-memory student with an attendance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    identification: StudentId,
    name: String,
    attended: BTreeSet<ClassSession>,
}

impl StudentRecord {
    /// Creates a student without any recorded attendance.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if identification or name is blank
    pub fn new(identification: &str, name: impl Into<String>) -> Result<Self, ValidationError> {
        let identification = StudentId::new(identification)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            identification,
            name,
            attended: BTreeSet::new(),
        })
    }

    /// Returns the student's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marks `session` as attended. Returns false if it already was.
    pub fn record_attendance(&mut self, session: ClassSession) -> bool {
        self.attended.insert(session)
    }

    /// Builder-style variant of [`record_attendance`](Self::record_attendance).
    pub fn with_attendance(mut self, session: ClassSession) -> Self {
        self.attended.insert(session);
        self
    }

    /// Returns attended sessions in chronological order.
    pub fn attended_sessions(&self) -> impl Iterator<Item = &ClassSession> {
        self.attended.iter()
    }
}

impl Student for StudentRecord {
    fn identification(&self) -> &StudentId {
        &self.identification
    }

    fn attended_session(&self, session: &ClassSession) -> bool {
        self.attended.contains(session)
    }
}
