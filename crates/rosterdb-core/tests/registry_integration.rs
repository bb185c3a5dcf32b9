//! End-to-end scenarios against the registry.

use pretty_assertions::assert_eq;
use rosterdb_core::{MutationOutcome, Registry};
use rosterdb_model::{CourseId, CourseTypeId, OfferingId, StudentId};

struct TestContext {
    registry: Registry,
    individual: CourseTypeId,
    group: CourseTypeId,
    hindi: CourseId,
}

impl TestContext {
    fn new() -> Self {
        let mut registry = Registry::with_seed_data();
        let individual = registry.course_types()[0].id.clone();
        let group = registry.course_types()[1].id.clone();
        let hindi = registry.courses()[0].id.clone();

        Self {
            registry,
            individual,
            group,
            hindi,
        }
    }

    fn add_offering(&mut self, course: &CourseId, kind: &CourseTypeId) -> OfferingId {
        self.registry
            .add_offering(course, kind)
            .created_id()
            .expect("offering should be created")
            .clone()
    }

    fn add_student(&mut self, name: &str, email: &str) -> StudentId {
        self.registry
            .add_student(name, email)
            .created_id()
            .expect("student should be created")
            .clone()
    }
}

#[test]
fn offering_lifecycle_with_registration() {
    // Spec scenario: add an offering, reject its duplicate, register a
    // student, then delete the offering and watch the cascade.
    let mut ctx = TestContext::new();

    let hindi = ctx.hindi.clone();
    let individual = ctx.individual.clone();
    let o1 = ctx.add_offering(&hindi, &individual);
    assert_eq!(ctx.registry.offerings().len(), 1);

    assert_eq!(
        ctx.registry.add_offering(&hindi, &individual),
        MutationOutcome::RejectedDuplicate
    );
    assert_eq!(ctx.registry.offerings().len(), 1);

    let ann = ctx.add_student("Ann", "ann@x.com");
    assert!(ctx.registry.register_student(&ann, &o1).was_applied());
    assert_eq!(ctx.registry.registrations().len(), 1);

    assert_eq!(ctx.registry.delete_offering(&o1), MutationOutcome::Deleted);
    assert!(ctx.registry.offerings().is_empty());
    assert!(ctx.registry.registrations().is_empty());
}

#[test]
fn registration_is_unique_per_course_across_types() {
    // Spec scenario: O1=(Hindi, Individual) and O2=(Hindi, Group) both
    // exist; a student registered for O1 may not register for O2.
    let mut ctx = TestContext::new();

    let hindi = ctx.hindi.clone();
    let individual = ctx.individual.clone();
    let group = ctx.group.clone();
    let o1 = ctx.add_offering(&hindi, &individual);
    let o2 = ctx.add_offering(&hindi, &group);

    let ann = ctx.add_student("Ann", "ann@x.com");
    assert!(ctx.registry.register_student(&ann, &o1).was_applied());

    assert_eq!(
        ctx.registry.register_student(&ann, &o2),
        MutationOutcome::RejectedDuplicate
    );
    assert_eq!(ctx.registry.registrations().len(), 1);
    assert_eq!(ctx.registry.registrations()[0].offering_id, o1);
}

#[test]
fn course_type_deletion_cascades_through_offerings() {
    let mut ctx = TestContext::new();

    let hindi = ctx.hindi.clone();
    let english = ctx.registry.courses()[1].id.clone();
    let individual = ctx.individual.clone();
    let group = ctx.group.clone();

    let doomed = ctx.add_offering(&hindi, &individual);
    let survivor = ctx.add_offering(&english, &group);

    let ann = ctx.add_student("Ann", "ann@x.com");
    let bob = ctx.add_student("Bob", "bob@x.com");
    ctx.registry.register_student(&ann, &doomed);
    ctx.registry.register_student(&bob, &survivor);

    assert_eq!(
        ctx.registry.delete_course_type(&individual),
        MutationOutcome::Deleted
    );

    // Offerings and registrations under the deleted type are gone;
    // everything else is untouched.
    assert_eq!(ctx.registry.course_types().len(), 2);
    assert_eq!(ctx.registry.offerings().len(), 1);
    assert_eq!(ctx.registry.offerings()[0].id, survivor);
    assert_eq!(ctx.registry.registrations().len(), 1);
    assert_eq!(ctx.registry.registrations()[0].student_id, bob);
    assert_eq!(ctx.registry.students().len(), 2);
}

#[test]
fn filtered_offerings_match_type_filter() {
    let mut ctx = TestContext::new();

    let hindi = ctx.hindi.clone();
    let english = ctx.registry.courses()[1].id.clone();
    let individual = ctx.individual.clone();
    let group = ctx.group.clone();

    let o1 = ctx.add_offering(&hindi, &individual);
    ctx.add_offering(&hindi, &group);
    ctx.add_offering(&english, &group);

    assert_eq!(ctx.registry.filtered_offerings(None).len(), 3);

    let individual_only = ctx.registry.filtered_offerings(Some(&individual));
    assert_eq!(individual_only.len(), 1);
    assert_eq!(individual_only[0].id, o1);

    assert_eq!(ctx.registry.filtered_offerings(Some(&group)).len(), 2);
}

#[test]
fn rejected_mutations_leave_state_unchanged() {
    let mut ctx = TestContext::new();

    let hindi = ctx.hindi.clone();
    let individual = ctx.individual.clone();
    let o1 = ctx.add_offering(&hindi, &individual);
    let ann = ctx.add_student("Ann", "ann@x.com");
    ctx.registry.register_student(&ann, &o1);

    let offerings_before: Vec<_> = ctx.registry.offerings().to_vec();
    let registrations_before: Vec<_> = ctx.registry.registrations().to_vec();

    assert!(ctx
        .registry
        .add_offering(&hindi, &individual)
        .is_rejected());
    assert!(ctx
        .registry
        .add_offering(&CourseId::from("missing"), &individual)
        .is_rejected());
    assert!(ctx.registry.register_student(&ann, &o1).is_rejected());
    assert_eq!(
        ctx.registry.delete_course(&CourseId::from("missing")),
        MutationOutcome::NotFound
    );

    assert_eq!(ctx.registry.offerings().to_vec(), offerings_before);
    assert_eq!(ctx.registry.registrations().to_vec(), registrations_before);
}

#[test]
fn display_names_resolve_through_references() {
    let mut ctx = TestContext::new();

    let hindi = ctx.hindi.clone();
    let individual = ctx.individual.clone();
    let o1 = ctx.add_offering(&hindi, &individual);

    let offering = ctx.registry.offering(&o1).unwrap();
    assert_eq!(
        ctx.registry.offering_display_name(offering),
        Some("Individual - Hindi".to_string())
    );
}
