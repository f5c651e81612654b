//! Course-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, StudentId, ValidationError};

/// Course-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    /// A required value was absent or malformed.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    /// A student with this identification is already enrolled.
    #[error("Identification already enrolled: {0}")]
    DuplicateIdentification(StudentId),

    /// Attendance rate requested for a course without students.
    #[error("Course has no enrolled students")]
    EmptyRoster,
}

impl CourseError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        CourseError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn duplicate_identification(id: StudentId) -> Self {
        CourseError::DuplicateIdentification(id)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            CourseError::InvalidArgument { .. } => ErrorCode::ValidationFailed,
            CourseError::DuplicateIdentification(_) => ErrorCode::DuplicateIdentification,
            CourseError::EmptyRoster => ErrorCode::EmptyRoster,
        }
    }
}

impl From<ValidationError> for CourseError {
    fn from(err: ValidationError) -> Self {
        CourseError::InvalidArgument {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CourseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::EmptyRoster => CourseError::EmptyRoster,
            _ => CourseError::InvalidArgument {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
        }
    }
}

impl From<CourseError> for DomainError {
    fn from(err: CourseError) -> Self {
        let code = err.code();
        let domain = DomainError::new(code, err.to_string());
        match err {
            CourseError::InvalidArgument { field, .. } => domain.with_detail("field", field),
            CourseError::DuplicateIdentification(id) => {
                domain.with_detail("identification", id.as_str())
            }
            CourseError::EmptyRoster => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        let id = StudentId::new("1").unwrap();
        assert_eq!(
            CourseError::invalid_argument("name", "blank").code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            CourseError::duplicate_identification(id).code(),
            ErrorCode::DuplicateIdentification
        );
        assert_eq!(CourseError::EmptyRoster.code(), ErrorCode::EmptyRoster);
    }

    #[test]
    fn duplicate_identification_displays_id() {
        let err = CourseError::duplicate_identification(StudentId::new("1094").unwrap());
        assert_eq!(err.to_string(), "Identification already enrolled: 1094");
    }

    #[test]
    fn validation_error_becomes_invalid_argument() {
        let err: CourseError = ValidationError::empty_field("timestamp").into();
        match err {
            CourseError::InvalidArgument { field, .. } => assert_eq!(field, "timestamp"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn domain_error_roundtrip_keeps_field() {
        let domain: DomainError = CourseError::invalid_argument("name", "blank").into();
        assert_eq!(domain.detail("field"), Some("name"));

        let back: CourseError = domain.into();
        assert!(matches!(back, CourseError::InvalidArgument { ref field, .. } if field == "name"));
    }

    #[test]
    fn empty_roster_survives_domain_conversion() {
        let domain: DomainError = CourseError::EmptyRoster.into();
        assert_eq!(domain.code, ErrorCode::EmptyRoster);
        assert_eq!(CourseError::from(domain), CourseError::EmptyRoster);
    }
}
