//! Student roster and registration operations.
//!
//! The registration constraint is course-level, not offering-level: a student
//! already registered for any offering of a course is rejected when trying to
//! register for another offering of the same course, even under a different
//! course type.

use rosterdb_model::{OfferingId, RegistrationId, Student, StudentId, StudentRegistration};
use tracing::{debug, warn};

use crate::outcome::MutationOutcome;

use super::Registry;

impl Registry {
    /// Append a new student. Emails are not checked for uniqueness.
    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> MutationOutcome<StudentId> {
        let row = Student::new(name, email);
        let id = row.id.clone();
        self.students.push(row);
        debug!(student_id = %id, "student added");
        MutationOutcome::Created(id)
    }

    /// Register a student for an offering.
    ///
    /// Rejected if the student or offering is absent, or if the student
    /// already holds a registration whose offering resolves to the same
    /// course.
    pub fn register_student(
        &mut self,
        student_id: &StudentId,
        offering_id: &OfferingId,
    ) -> MutationOutcome<RegistrationId> {
        if self.student(student_id).is_none() {
            warn!(student_id = %student_id, "registration rejected: unknown student");
            return MutationOutcome::RejectedMissingReference;
        }
        let course_id = match self.offering(offering_id) {
            Some(offering) => offering.course_id.clone(),
            None => {
                warn!(offering_id = %offering_id, "registration rejected: unknown offering");
                return MutationOutcome::RejectedMissingReference;
            }
        };

        let already_registered = self.registrations.iter().any(|r| {
            r.student_id == *student_id
                && self
                    .offering(&r.offering_id)
                    .is_some_and(|o| o.course_id == course_id)
        });
        if already_registered {
            debug!(
                student_id = %student_id,
                course_id = %course_id,
                "registration rejected: student already registered for course"
            );
            return MutationOutcome::RejectedDuplicate;
        }

        let row = StudentRegistration::new(student_id.clone(), offering_id.clone());
        let id = row.id.clone();
        self.registrations.push(row);
        debug!(registration_id = %id, student_id = %student_id, offering_id = %offering_id, "student registered");
        MutationOutcome::Created(id)
    }
}
