//! Entity structs and their constructors.
//!
//! Constructors mint a fresh id (and, where applicable, a creation timestamp)
//! so that rows can only enter the registry through explicit add operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{CourseId, CourseTypeId, OfferingId, RegistrationId, StudentId};

/// A category of instruction (e.g. Individual, Group, Special).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseType {
    /// Unique identifier.
    pub id: CourseTypeId,
    /// Display name. Not required to be unique.
    pub name: String,
}

/// A subject taught (e.g. Hindi, English).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier.
    pub id: CourseId,
    /// Display name. Not required to be unique.
    pub name: String,
}

/// One concrete class section: the pairing of a course with a course type.
///
/// The `(course_id, course_type_id)` pair is unique across all offerings;
/// the registry enforces this at mutation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOffering {
    /// Unique identifier.
    pub id: OfferingId,
    /// The course being offered.
    pub course_id: CourseId,
    /// The type of instruction.
    pub course_type_id: CourseTypeId,
    /// When the offering was created. Untouched by updates.
    pub created_at: DateTime<Utc>,
}

/// A student on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// Contact email. Not required to be unique.
    pub email: String,
}

/// The association of a student with one offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRegistration {
    /// Unique identifier.
    pub id: RegistrationId,
    /// The registered student.
    pub student_id: StudentId,
    /// The offering registered for.
    pub offering_id: OfferingId,
    /// When the registration was made.
    pub registered_at: DateTime<Utc>,
}

impl CourseType {
    /// Create a course type with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CourseTypeId::generate(),
            name: name.into(),
        }
    }
}

impl Course {
    /// Create a course with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CourseId::generate(),
            name: name.into(),
        }
    }
}

impl CourseOffering {
    /// Create an offering with a fresh id and the current timestamp.
    pub fn new(course_id: CourseId, course_type_id: CourseTypeId) -> Self {
        Self {
            id: OfferingId::generate(),
            course_id,
            course_type_id,
            created_at: Utc::now(),
        }
    }
}

impl Student {
    /// Create a student with a fresh id.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: StudentId::generate(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl StudentRegistration {
    /// Create a registration with a fresh id and the current timestamp.
    pub fn new(student_id: StudentId, offering_id: OfferingId) -> Self {
        Self {
            id: RegistrationId::generate(),
            student_id,
            offering_id,
            registered_at: Utc::now(),
        }
    }
}
