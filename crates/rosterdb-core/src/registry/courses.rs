//! Course type and course operations.
//!
//! Names are not required to be unique; the only constraint work here is the
//! delete cascade, which removes dependent offerings and then the
//! registrations referencing those offerings.

use rosterdb_model::{Course, CourseId, CourseType, CourseTypeId, OfferingId};
use tracing::debug;

use crate::outcome::MutationOutcome;

use super::Registry;

impl Registry {
    /// Append a new course type.
    pub fn add_course_type(&mut self, name: impl Into<String>) -> MutationOutcome<CourseTypeId> {
        let row = CourseType::new(name);
        let id = row.id.clone();
        self.course_types.push(row);
        debug!(course_type_id = %id, "course type added");
        MutationOutcome::Created(id)
    }

    /// Rename an existing course type.
    pub fn update_course_type(
        &mut self,
        id: &CourseTypeId,
        name: impl Into<String>,
    ) -> MutationOutcome<CourseTypeId> {
        match self.course_types.iter_mut().find(|ct| ct.id == *id) {
            Some(row) => {
                row.name = name.into();
                debug!(course_type_id = %id, "course type renamed");
                MutationOutcome::Updated
            }
            None => MutationOutcome::NotFound,
        }
    }

    /// Delete a course type, cascading to its offerings and their
    /// registrations.
    pub fn delete_course_type(&mut self, id: &CourseTypeId) -> MutationOutcome<CourseTypeId> {
        if !self.course_types.iter().any(|ct| ct.id == *id) {
            return MutationOutcome::NotFound;
        }

        let orphaned: Vec<OfferingId> = self
            .offerings
            .iter()
            .filter(|o| o.course_type_id == *id)
            .map(|o| o.id.clone())
            .collect();
        let registrations_removed = self.prune_registrations(&orphaned);

        self.offerings.retain(|o| o.course_type_id != *id);
        self.course_types.retain(|ct| ct.id != *id);

        debug!(
            course_type_id = %id,
            offerings_removed = orphaned.len(),
            registrations_removed,
            "course type deleted"
        );
        MutationOutcome::Deleted
    }

    /// Append a new course.
    pub fn add_course(&mut self, name: impl Into<String>) -> MutationOutcome<CourseId> {
        let row = Course::new(name);
        let id = row.id.clone();
        self.courses.push(row);
        debug!(course_id = %id, "course added");
        MutationOutcome::Created(id)
    }

    /// Rename an existing course.
    pub fn update_course(
        &mut self,
        id: &CourseId,
        name: impl Into<String>,
    ) -> MutationOutcome<CourseId> {
        match self.courses.iter_mut().find(|c| c.id == *id) {
            Some(row) => {
                row.name = name.into();
                debug!(course_id = %id, "course renamed");
                MutationOutcome::Updated
            }
            None => MutationOutcome::NotFound,
        }
    }

    /// Delete a course, cascading to its offerings and their registrations.
    pub fn delete_course(&mut self, id: &CourseId) -> MutationOutcome<CourseId> {
        if !self.courses.iter().any(|c| c.id == *id) {
            return MutationOutcome::NotFound;
        }

        let orphaned: Vec<OfferingId> = self
            .offerings
            .iter()
            .filter(|o| o.course_id == *id)
            .map(|o| o.id.clone())
            .collect();
        let registrations_removed = self.prune_registrations(&orphaned);

        self.offerings.retain(|o| o.course_id != *id);
        self.courses.retain(|c| c.id != *id);

        debug!(
            course_id = %id,
            offerings_removed = orphaned.len(),
            registrations_removed,
            "course deleted"
        );
        MutationOutcome::Deleted
    }

    /// Remove every registration referencing one of `offering_ids`.
    /// Returns the number of rows removed.
    pub(super) fn prune_registrations(&mut self, offering_ids: &[OfferingId]) -> usize {
        if offering_ids.is_empty() {
            return 0;
        }
        let before = self.registrations.len();
        self.registrations
            .retain(|r| !offering_ids.contains(&r.offering_id));
        before - self.registrations.len()
    }
}
