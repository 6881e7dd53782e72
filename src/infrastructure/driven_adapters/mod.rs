//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL repositories
//! - Password hashing and JWT tokens
//! - Material file storage
//! - Configuration

pub mod bcrypt_hasher;
pub mod config;
pub mod database;
pub mod file_storage;
pub mod jwt;
pub mod postgres;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use config::AppConfig;
pub use file_storage::LocalFileStorage;
pub use jwt::JwtTokenService;
pub use postgres::PostgresRepositories;
