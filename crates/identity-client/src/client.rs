//! The identity client capability and backend selection.

use crate::config::IdentityConfig;
use crate::error::IdentityResult;
use crate::mock::MockIdentityClient;
use crate::remote::RemoteIdentityClient;
use crate::types::*;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Which implementation sits behind an [`IdentityClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Remote,
    Mock,
}

/// Caller credential, sent as a bearer token.
///
/// Held as a `SecretString` so it never shows up in logs or debug output.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// An empty credential; no `Authorization` header is sent.
    pub fn anonymous() -> Self {
        Self::new(String::new())
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub(crate) fn token(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<SecretString> for Credential {
    fn from(secret: SecretString) -> Self {
        Self(secret)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Identity operations available to the service facade.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Which implementation this is.
    fn backend(&self) -> Backend;

    /// Fetch the caller's profile.
    async fn get_profile(&self) -> IdentityResult<Profile>;

    /// Register a phone number against the caller's profile.
    async fn register_phone_number(
        &self,
        phone_number: PhoneNumber,
    ) -> IdentityResult<RegisterPhoneResponse>;

    /// Ask the backend to send a verification code for a registered number.
    async fn send_verification_code(&self, id: FieldId) -> IdentityResult<SendCodeResponse>;

    /// Confirm the code the user received.
    async fn confirm_verification_code(
        &self,
        id: FieldId,
        code: &str,
    ) -> IdentityResult<ConfirmCodeResponse>;
}

/// Pick the client implementation for this process.
///
/// Returns the mock when `config.mock_services` is set, otherwise a remote
/// client bound to `credential`. The credential is unused in mock mode.
pub fn create_client(
    config: &IdentityConfig,
    credential: Credential,
) -> IdentityResult<Arc<dyn IdentityClient>> {
    if config.mock_services {
        info!(latency = ?config.mock_latency, "Using mock identity client");
        return Ok(Arc::new(MockIdentityClient::new(config.mock_latency)));
    }

    info!(service_url = %config.service_url, "Using remote identity client");
    let client = RemoteIdentityClient::new(&config.service_url, credential, config.timeout)?;
    Ok(Arc::new(client))
}
