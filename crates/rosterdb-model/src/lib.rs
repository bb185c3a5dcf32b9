//! Shared entity model for rosterdb.
//!
//! This crate defines the types shared between the registry engine and its
//! callers: typed identifiers, the five entity structs, and the sort
//! specifications consumed by the engine's table views.
//!
//! # Modules
//!
//! - [`id`] - Typed identifier newtypes, one per entity family
//! - [`entity`] - Entity structs and their constructors
//! - [`sort`] - Sort direction and per-table sort columns
//!
//! All types derive `serde::{Serialize, Deserialize}` so callers can snapshot
//! or export registry contents without extra glue.

pub mod entity;
pub mod id;
pub mod sort;

pub use entity::{Course, CourseOffering, CourseType, Student, StudentRegistration};
pub use id::{CourseId, CourseTypeId, OfferingId, RegistrationId, StudentId};
pub use sort::{OfferingSortColumn, SortDirection, StudentSortColumn};
