//! Application layer - orchestration on top of the hashing core

pub mod services;

pub use services::PasswordService;
