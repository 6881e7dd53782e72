//! User Use Cases

mod list_users;

pub use list_users::ListUsersUseCase;
