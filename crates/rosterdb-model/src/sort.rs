//! Sort specifications for registry table views.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// The opposite direction. Clicking an already-active column header
    /// toggles between ascending and descending.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Apply this direction to an ascending comparison.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

/// Sortable columns of the offerings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferingSortColumn {
    /// The derived "type - course" display name.
    DisplayName,
    /// The underlying course name.
    Course,
    /// The course type name.
    CourseType,
}

/// Sortable columns of the student roster table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentSortColumn {
    /// Student name.
    Name,
    /// Student email.
    Email,
}
