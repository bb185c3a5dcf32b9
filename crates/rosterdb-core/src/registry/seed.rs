//! Default rows for a freshly booted registry.

use rosterdb_model::{Course, CourseType};

use super::Registry;

const DEFAULT_COURSE_TYPES: [&str; 3] = ["Individual", "Group", "Special"];
const DEFAULT_COURSES: [&str; 3] = ["Hindi", "English", "Urdu"];

/// Populate `registry` with the default course types and courses.
pub(super) fn apply(registry: &mut Registry) {
    registry
        .course_types
        .extend(DEFAULT_COURSE_TYPES.map(CourseType::new));
    registry.courses.extend(DEFAULT_COURSES.map(Course::new));
}
