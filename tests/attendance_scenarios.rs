//! End-to-end roster scenarios and attendance properties.
//!
//! Run with: cargo test --test attendance_scenarios

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use course_roster::application::AttendanceReporter;
use course_roster::config::{AttendanceConfig, EmptyRosterPolicy};
use course_roster::domain::course::{ClassSession, Course, CourseError, Student, StudentRecord};

fn session(s: &str) -> ClassSession {
    ClassSession::parse(s).unwrap()
}

fn ids(students: &[Arc<dyn Student>]) -> Vec<String> {
    students
        .iter()
        .map(|s| s.identification().to_string())
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn poo_course_with_one_attendee_and_one_absentee() {
    let s1 = session("2024-01-10T08:00");
    let a = StudentRecord::new("1", "A").unwrap().with_attendance(s1);
    let b = StudentRecord::new("2", "B").unwrap();

    let mut course = Course::new("POO").unwrap();
    course.enroll(Arc::new(a)).unwrap();
    course.enroll(Arc::new(b)).unwrap();
    course.schedule_session(s1);

    assert_eq!(course.name(), "POO");
    assert_eq!(ids(&course.attendees(&s1)), vec!["1"]);
    assert_eq!(ids(&course.absentees(&s1)), vec!["2"]);
    let rate = course.attendance_rate(&s1).unwrap();
    assert!((rate.as_fraction() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn three_students_two_attended() {
    let s1 = session("2024-01-10T08:00");
    let mut course = Course::new("Algorithms").unwrap();
    course
        .enroll(Arc::new(StudentRecord::new("1", "A").unwrap().with_attendance(s1)))
        .unwrap();
    course
        .enroll(Arc::new(StudentRecord::new("2", "B").unwrap().with_attendance(s1)))
        .unwrap();
    course.enroll(Arc::new(StudentRecord::new("3", "C").unwrap())).unwrap();

    let rate = course.attendance_rate(&s1).unwrap();
    assert!((rate.as_fraction() - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn duplicate_enrollment_leaves_roster_unchanged() {
    let mut course = Course::new("POO").unwrap();
    course.enroll(Arc::new(StudentRecord::new("1", "A").unwrap())).unwrap();
    course.enroll(Arc::new(StudentRecord::new("2", "B").unwrap())).unwrap();
    let before = ids(course.students());

    let err = course
        .enroll(Arc::new(StudentRecord::new("1", "Impostor").unwrap()))
        .unwrap_err();

    assert!(matches!(err, CourseError::DuplicateIdentification(_)));
    assert_eq!(ids(course.students()), before);
}

#[test]
fn empty_roster_rate_does_not_panic() {
    let s1 = session("2024-01-10T08:00");
    let course = Course::new("POO").unwrap();

    assert_eq!(course.attendance_rate(&s1), Err(CourseError::EmptyRoster));

    let zero = AttendanceReporter::new(AttendanceConfig {
        empty_roster: EmptyRosterPolicy::Zero,
    });
    assert_eq!(zero.session_report(&course, &s1).unwrap().rate, 0.0);
}

#[test]
fn find_student_hits_and_misses() {
    let mut course = Course::new("POO").unwrap();
    assert!(course.find_student("1").is_none());

    course.enroll(Arc::new(StudentRecord::new("1", "A").unwrap())).unwrap();
    let found = course.find_student("1").unwrap();
    assert_eq!(found.identification().as_str(), "1");
    assert!(course.find_student("2").is_none());
}

#[test]
fn scheduling_twice_keeps_one_entry() {
    let mut course = Course::new("POO").unwrap();
    course.schedule_session(session("2024-01-10T08:00"));
    course.schedule_session(session("2024-01-10T08:00:00Z"));
    assert_eq!(course.sessions().len(), 1);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn valid_names_are_kept_verbatim(name in "[A-Za-z0-9][A-Za-z0-9 ]{0,400}") {
        let course = Course::new(name.clone()).unwrap();
        prop_assert_eq!(course.name(), name.as_str());
    }

    #[test]
    fn attendees_and_absentees_partition_roster(attendance in prop::collection::vec(any::<bool>(), 0..40)) {
        let s1 = session("2024-01-10T08:00");
        let mut course = Course::new("POO").unwrap();
        for (i, attended) in attendance.iter().enumerate() {
            let mut student = StudentRecord::new(&i.to_string(), "Student").unwrap();
            if *attended {
                student.record_attendance(s1);
            }
            course.enroll(Arc::new(student)).unwrap();
        }

        let attendees: HashSet<String> = ids(&course.attendees(&s1)).into_iter().collect();
        let absentees: HashSet<String> = ids(&course.absentees(&s1)).into_iter().collect();
        let roster: HashSet<String> = ids(course.students()).into_iter().collect();

        prop_assert!(attendees.is_disjoint(&absentees));
        let union: HashSet<String> = attendees.union(&absentees).cloned().collect();
        prop_assert_eq!(&union, &roster);

        match course.attendance_rate(&s1) {
            Ok(rate) => {
                let expected = attendees.len() as f64 / roster.len() as f64;
                prop_assert!((rate.as_fraction() - expected).abs() < 1e-12);
            }
            Err(e) => {
                prop_assert!(roster.is_empty());
                prop_assert_eq!(e, CourseError::EmptyRoster);
            }
        }
    }
}
