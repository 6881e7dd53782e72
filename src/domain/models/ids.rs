//! Entity Identifiers
//!
//! Newtype wrappers around database-assigned ids so that a course id can
//! never be passed where a user id is expected.

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifier of a registered user (teacher or student)
    UserId
);
entity_id!(
    /// Identifier of a course
    CourseId
);
entity_id!(
    /// Identifier of an assignment
    AssignmentId
);
entity_id!(
    /// Identifier of an enrollment record
    EnrollmentId
);
entity_id!(
    /// Identifier of an assignment submission
    SubmissionId
);
entity_id!(
    /// Identifier of an uploaded teaching material
    MaterialId
);
