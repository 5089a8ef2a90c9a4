//! Identity service facade.

use identity_client::{
    create_client, Backend, ConfirmCodeResponse, Credential, FieldId, IdentityClient,
    IdentityConfig, IdentityResult, PhoneNumber, Profile, RegisterPhoneResponse,
    SendCodeResponse,
};
use std::sync::Arc;

/// Single entry point for identity operations.
///
/// Owns exactly one client, picked when the service is built. Every method
/// delegates unchanged.
#[derive(Clone)]
pub struct IdentityService {
    client: Arc<dyn IdentityClient>,
}

impl IdentityService {
    /// Build the service for one authenticated session.
    pub fn new(config: &IdentityConfig, credential: Credential) -> IdentityResult<Self> {
        Ok(Self::with_client(create_client(config, credential)?))
    }

    /// Wrap an existing client.
    pub fn with_client(client: Arc<dyn IdentityClient>) -> Self {
        Self { client }
    }

    /// The backend chosen at construction.
    pub fn backend(&self) -> Backend {
        self.client.backend()
    }

    pub async fn get_profile(&self) -> IdentityResult<Profile> {
        self.client.get_profile().await
    }

    pub async fn register_phone_number(
        &self,
        phone_number: PhoneNumber,
    ) -> IdentityResult<RegisterPhoneResponse> {
        self.client.register_phone_number(phone_number).await
    }

    pub async fn send_verification_code(&self, id: FieldId) -> IdentityResult<SendCodeResponse> {
        self.client.send_verification_code(id).await
    }

    pub async fn confirm_verification_code(
        &self,
        id: FieldId,
        code: &str,
    ) -> IdentityResult<ConfirmCodeResponse> {
        self.client.confirm_verification_code(id, code).await
    }
}
