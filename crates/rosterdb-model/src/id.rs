//! Typed identifier newtypes.
//!
//! Every entity family gets its own id type so that a `CourseId` can never be
//! handed to an operation expecting a `CourseTypeId`. The representation is an
//! opaque unique string, freshly generated (UUID v4) at entity creation time.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh unique identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_type!(
    /// Identifier for a [`CourseType`](crate::CourseType).
    CourseTypeId
);
id_type!(
    /// Identifier for a [`Course`](crate::Course).
    CourseId
);
id_type!(
    /// Identifier for a [`CourseOffering`](crate::CourseOffering).
    OfferingId
);
id_type!(
    /// Identifier for a [`Student`](crate::Student).
    StudentId
);
id_type!(
    /// Identifier for a [`StudentRegistration`](crate::StudentRegistration).
    RegistrationId
);
