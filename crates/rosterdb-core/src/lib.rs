//! Registry engine for rosterdb.
//!
//! This crate provides the in-memory relational store: the [`Registry`]
//! object owning the five entity collections, mutation operations returning
//! tagged [`MutationOutcome`] values, referential-integrity cascades, and the
//! query helpers a presentation layer reads its views from.
//!
//! The registry is strictly single-threaded and volatile: construct one per
//! application instance with [`Registry::new`] or
//! [`Registry::with_seed_data`], pass it around by reference, and discard it
//! at shutdown. There is no persistence and no notification channel; callers
//! re-read collections after each mutation.

pub mod error;
pub mod outcome;
pub mod registry;
pub mod validate;

pub use error::ValidationError;
pub use outcome::MutationOutcome;
pub use registry::Registry;
