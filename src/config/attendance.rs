//! Attendance reporting configuration

use serde::Deserialize;

/// How reports treat a session rate when the roster is empty
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyRosterPolicy {
    /// Surface `CourseError::EmptyRoster` to the caller
    #[default]
    Error,
    /// Report a rate of 0.0
    Zero,
}

/// Attendance reporting configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AttendanceConfig {
    /// Behaviour when an attendance rate is requested for an empty roster
    #[serde(default)]
    pub empty_roster: EmptyRosterPolicy,
}
