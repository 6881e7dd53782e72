//! Authentication Use Cases

mod login_user;
mod register_user;

pub use login_user::{LoginCommand, LoginUserUseCase};
pub use register_user::{RegisterUserCommand, RegisterUserUseCase};
