//! Application services

mod password;

pub use password::PasswordService;
