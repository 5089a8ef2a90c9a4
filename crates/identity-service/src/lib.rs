//! Identity service facade and local development CLI.

pub mod command;
pub mod config;
pub mod error;
pub mod service;

pub use command::Command;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use service::IdentityService;
