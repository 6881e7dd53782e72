//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod access;
pub mod assignments;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod materials;
pub mod submissions;
pub mod users;
