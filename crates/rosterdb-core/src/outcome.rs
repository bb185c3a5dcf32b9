//! Tagged outcomes for registry mutations.

/// The result of a registry mutation.
///
/// Every mutation reports exactly what happened instead of silently
/// no-opping, so callers have a single source of truth for success and
/// failure. Any `Rejected*` or `NotFound` outcome guarantees the registry
/// was not mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome<Id> {
    /// A new row was appended; carries its fresh identifier.
    Created(Id),
    /// An existing row was modified in place.
    Updated,
    /// The row (and any cascaded dependents) was removed.
    Deleted,
    /// Rejected: the mutation would violate a uniqueness constraint.
    RejectedDuplicate,
    /// Rejected: a referenced row does not exist.
    RejectedMissingReference,
    /// The target row does not exist.
    NotFound,
}

impl<Id> MutationOutcome<Id> {
    /// Whether the mutation changed registry state.
    pub fn was_applied(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated | Self::Deleted)
    }

    /// Whether the mutation was rejected by a constraint check.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::RejectedDuplicate | Self::RejectedMissingReference)
    }

    /// The created row's id, if this outcome is [`Created`](Self::Created).
    pub fn created_id(&self) -> Option<&Id> {
        match self {
            Self::Created(id) => Some(id),
            _ => None,
        }
    }
}
