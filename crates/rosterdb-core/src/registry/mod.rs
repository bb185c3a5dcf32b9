//! The registry: an in-memory relational store for course administration.
//!
//! [`Registry`] owns five ordered collections and guarantees two invariants
//! under every mutation:
//!
//! - the `(course_id, course_type_id)` pair is unique across offerings, and
//! - a student never holds two registrations resolving to the same course.
//!
//! Deletes cascade: removing a course or course type removes its offerings
//! and, transitively, the registrations for those offerings; removing an
//! offering removes its registrations.

mod courses;
mod enrollment;
mod offerings;
mod queries;
mod seed;

use rosterdb_model::{Course, CourseOffering, CourseType, Student, StudentRegistration};

/// The in-memory store. One per application instance.
///
/// Rows enter only through `add_*` operations and leave only through
/// `delete_*` operations; collections otherwise keep insertion order.
/// There is no interior mutability: callers hold the registry directly and
/// mutate it through `&mut self`.
#[derive(Debug, Default)]
pub struct Registry {
    course_types: Vec<CourseType>,
    courses: Vec<Course>,
    offerings: Vec<CourseOffering>,
    students: Vec<Student>,
    registrations: Vec<StudentRegistration>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the default course types
    /// (Individual, Group, Special) and courses (Hindi, English, Urdu).
    pub fn with_seed_data() -> Self {
        let mut registry = Self::new();
        seed::apply(&mut registry);
        registry
    }

    /// All course types, in insertion order.
    pub fn course_types(&self) -> &[CourseType] {
        &self.course_types
    }

    /// All courses, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All offerings, in insertion order.
    pub fn offerings(&self) -> &[CourseOffering] {
        &self.offerings
    }

    /// All students, in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All registrations, in insertion order.
    pub fn registrations(&self) -> &[StudentRegistration] {
        &self.registrations
    }
}
