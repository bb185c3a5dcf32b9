//! Offering operations.
//!
//! An offering pairs a course with a course type; the pair is unique across
//! the collection. Updates exclude the row being updated from the duplicate
//! check so an offering can always be re-saved onto its own pair.

use rosterdb_model::{CourseId, CourseOffering, CourseTypeId, OfferingId};
use tracing::{debug, warn};

use crate::outcome::MutationOutcome;

use super::Registry;

impl Registry {
    /// Append a new offering for `(course_id, course_type_id)`.
    ///
    /// Rejected if either referenced row is absent or if an offering with the
    /// same pair already exists.
    pub fn add_offering(
        &mut self,
        course_id: &CourseId,
        course_type_id: &CourseTypeId,
    ) -> MutationOutcome<OfferingId> {
        if self.course(course_id).is_none() || self.course_type(course_type_id).is_none() {
            warn!(
                course_id = %course_id,
                course_type_id = %course_type_id,
                "offering rejected: missing reference"
            );
            return MutationOutcome::RejectedMissingReference;
        }
        if !self.pair_available(course_id, course_type_id, None) {
            debug!(
                course_id = %course_id,
                course_type_id = %course_type_id,
                "offering rejected: duplicate pair"
            );
            return MutationOutcome::RejectedDuplicate;
        }

        let row = CourseOffering::new(course_id.clone(), course_type_id.clone());
        let id = row.id.clone();
        self.offerings.push(row);
        debug!(offering_id = %id, course_id = %course_id, course_type_id = %course_type_id, "offering added");
        MutationOutcome::Created(id)
    }

    /// Repoint an existing offering at a new `(course_id, course_type_id)`
    /// pair. The creation timestamp is untouched.
    ///
    /// Rejected if the new pair collides with a different offering or if a
    /// referenced row is absent. Re-saving an offering onto its current pair
    /// succeeds.
    pub fn update_offering(
        &mut self,
        id: &OfferingId,
        course_id: &CourseId,
        course_type_id: &CourseTypeId,
    ) -> MutationOutcome<OfferingId> {
        if !self.offerings.iter().any(|o| o.id == *id) {
            return MutationOutcome::NotFound;
        }
        if self.course(course_id).is_none() || self.course_type(course_type_id).is_none() {
            warn!(
                offering_id = %id,
                course_id = %course_id,
                course_type_id = %course_type_id,
                "offering update rejected: missing reference"
            );
            return MutationOutcome::RejectedMissingReference;
        }
        if !self.pair_available(course_id, course_type_id, Some(id)) {
            debug!(
                offering_id = %id,
                course_id = %course_id,
                course_type_id = %course_type_id,
                "offering update rejected: duplicate pair"
            );
            return MutationOutcome::RejectedDuplicate;
        }

        // Presence was checked above.
        if let Some(row) = self.offerings.iter_mut().find(|o| o.id == *id) {
            row.course_id = course_id.clone();
            row.course_type_id = course_type_id.clone();
        }
        debug!(offering_id = %id, "offering updated");
        MutationOutcome::Updated
    }

    /// Delete an offering, cascading to its registrations.
    pub fn delete_offering(&mut self, id: &OfferingId) -> MutationOutcome<OfferingId> {
        if !self.offerings.iter().any(|o| o.id == *id) {
            return MutationOutcome::NotFound;
        }

        let registrations_removed = self.prune_registrations(std::slice::from_ref(id));
        self.offerings.retain(|o| o.id != *id);

        debug!(offering_id = %id, registrations_removed, "offering deleted");
        MutationOutcome::Deleted
    }

    /// Whether `(course_id, course_type_id)` is free, ignoring `exclude`
    /// (the row being updated, if any).
    fn pair_available(
        &self,
        course_id: &CourseId,
        course_type_id: &CourseTypeId,
        exclude: Option<&OfferingId>,
    ) -> bool {
        !self.offerings.iter().any(|o| {
            o.course_id == *course_id
                && o.course_type_id == *course_type_id
                && Some(&o.id) != exclude
        })
    }
}
