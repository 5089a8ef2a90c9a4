//! Identity service client with a remote HTTP backend and a local mock.

mod client;
mod config;
mod error;
mod mock;
mod remote;
mod types;

pub mod mappers;
pub mod wire;

pub use client::{create_client, Backend, Credential, IdentityClient};
pub use config::IdentityConfig;
pub use error::{IdentityError, IdentityResult};
pub use mock::{new_field_id, MockIdentityClient};
pub use remote::RemoteIdentityClient;
pub use types::*;
