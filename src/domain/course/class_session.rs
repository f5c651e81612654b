//! Class session value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

use super::CourseError;

/// A scheduled occurrence of a course, identified by when it takes place.
///
/// Two sessions with the same timestamp are the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassSession {
    timestamp: Timestamp,
}

impl ClassSession {
    /// Creates a session held at `timestamp`.
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Creates a session from a timestamp that may be missing.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `timestamp` is `None`
    pub fn try_new(timestamp: Option<Timestamp>) -> Result<Self, CourseError> {
        timestamp
            .map(Self::new)
            .ok_or_else(|| ValidationError::empty_field("timestamp").into())
    }

    /// Parses a session from an RFC 3339 or naive `YYYY-MM-DDTHH:MM` string.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the input is blank or not a date-time
    pub fn parse(input: &str) -> Result<Self, CourseError> {
        Ok(Self::new(Timestamp::parse(input)?))
    }

    /// Returns when the session takes place.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }
}

impl fmt::Display for ClassSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.timestamp)
    }
}
