//! Course Management API
//!
//! A Rust-based microservice where teachers manage courses, assignments,
//! teaching material and enrolled students, following Clean/Hexagonal
//! Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
