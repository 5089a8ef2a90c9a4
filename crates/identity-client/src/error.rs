//! Identity client errors.

use thiserror::Error;

/// Transport and unexpected failures.
///
/// Expected domain outcomes (already registered, wrong code, ...) are not
/// errors; they come back as tagged response values.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type IdentityResult<T> = Result<T, IdentityError>;
