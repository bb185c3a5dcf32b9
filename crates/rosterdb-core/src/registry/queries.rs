//! Read-side helpers: lookups, filters, and sorted table views.
//!
//! Sorted views compare case-insensitively and return borrowed rows; the
//! collections themselves keep insertion order.

use std::cmp::Ordering;

use rosterdb_model::{
    Course, CourseId, CourseOffering, CourseType, CourseTypeId, OfferingId, OfferingSortColumn,
    RegistrationId, SortDirection, Student, StudentId, StudentRegistration, StudentSortColumn,
};

use super::Registry;

impl Registry {
    /// Look up a course type by id.
    pub fn course_type(&self, id: &CourseTypeId) -> Option<&CourseType> {
        self.course_types.iter().find(|ct| ct.id == *id)
    }

    /// Look up a course by id.
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == *id)
    }

    /// Look up an offering by id.
    pub fn offering(&self, id: &OfferingId) -> Option<&CourseOffering> {
        self.offerings.iter().find(|o| o.id == *id)
    }

    /// Look up a student by id.
    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == *id)
    }

    /// Look up a registration by id.
    pub fn registration(&self, id: &RegistrationId) -> Option<&StudentRegistration> {
        self.registrations.iter().find(|r| r.id == *id)
    }

    /// All students holding a registration for the given offering, in roster
    /// order.
    pub fn students_by_offering(&self, offering_id: &OfferingId) -> Vec<&Student> {
        let registered: Vec<&StudentId> = self
            .registrations
            .iter()
            .filter(|r| r.offering_id == *offering_id)
            .map(|r| &r.student_id)
            .collect();
        self.students
            .iter()
            .filter(|s| registered.contains(&&s.id))
            .collect()
    }

    /// A student's registrations, in registration order.
    pub fn registrations_by_student(&self, student_id: &StudentId) -> Vec<&StudentRegistration> {
        self.registrations
            .iter()
            .filter(|r| r.student_id == *student_id)
            .collect()
    }

    /// Offerings matching a course type filter. `None` returns the full set.
    pub fn filtered_offerings(&self, course_type_id: Option<&CourseTypeId>) -> Vec<&CourseOffering> {
        match course_type_id {
            None => self.offerings.iter().collect(),
            Some(id) => self
                .offerings
                .iter()
                .filter(|o| o.course_type_id == *id)
                .collect(),
        }
    }

    /// The derived display name for an offering: `"{type name} - {course name}"`.
    ///
    /// `None` if either reference cannot be resolved.
    pub fn offering_display_name(&self, offering: &CourseOffering) -> Option<String> {
        let course = self.course(&offering.course_id)?;
        let course_type = self.course_type(&offering.course_type_id)?;
        Some(format!("{} - {}", course_type.name, course.name))
    }

    /// Offerings sorted for table display.
    pub fn sorted_offerings(
        &self,
        column: OfferingSortColumn,
        direction: SortDirection,
    ) -> Vec<&CourseOffering> {
        let key = |offering: &CourseOffering| -> String {
            let name = match column {
                OfferingSortColumn::DisplayName => self.offering_display_name(offering),
                OfferingSortColumn::Course => self
                    .course(&offering.course_id)
                    .map(|c| c.name.clone()),
                OfferingSortColumn::CourseType => self
                    .course_type(&offering.course_type_id)
                    .map(|ct| ct.name.clone()),
            };
            name.unwrap_or_default().to_lowercase()
        };

        let mut rows: Vec<&CourseOffering> = self.offerings.iter().collect();
        rows.sort_by(|a, b| direction.apply(key(a).cmp(&key(b))));
        rows
    }

    /// Students sorted for table display.
    pub fn sorted_students(
        &self,
        column: StudentSortColumn,
        direction: SortDirection,
    ) -> Vec<&Student> {
        let mut rows: Vec<&Student> = self.students.iter().collect();
        rows.sort_by(|a, b| {
            let ord = match column {
                StudentSortColumn::Name => cmp_ci(&a.name, &b.name),
                StudentSortColumn::Email => cmp_ci(&a.email, &b.email),
            };
            direction.apply(ord)
        });
        rows
    }

    /// Course types sorted by name.
    pub fn sorted_course_types(&self, direction: SortDirection) -> Vec<&CourseType> {
        let mut rows: Vec<&CourseType> = self.course_types.iter().collect();
        rows.sort_by(|a, b| direction.apply(cmp_ci(&a.name, &b.name)));
        rows
    }

    /// Courses sorted by name.
    pub fn sorted_courses(&self, direction: SortDirection) -> Vec<&Course> {
        let mut rows: Vec<&Course> = self.courses.iter().collect();
        rows.sort_by(|a, b| direction.apply(cmp_ci(&a.name, &b.name)));
        rows
    }
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
