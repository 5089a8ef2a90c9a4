//! Identity backend HTTP client.

use crate::client::{Backend, Credential, IdentityClient};
use crate::error::{IdentityError, IdentityResult};
use crate::mappers;
use crate::types::*;
use crate::wire::*;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the remote identity service.
///
/// Each operation is one POST of a JSON argument record to
/// `{base_url}/{method}`. Nothing is retried.
#[derive(Clone, Debug)]
pub struct RemoteIdentityClient {
    client: Client,
    base_url: String,
    credential: Credential,
}

impl RemoteIdentityClient {
    /// Create a new client bound to `credential`.
    pub fn new(
        base_url: impl Into<String>,
        credential: Credential,
        timeout: Duration,
    ) -> IdentityResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| IdentityError::Config(format!("invalid service URL '{}': {}", base_url, e)))?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            credential,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<Req, Resp>(&self, method: &str, request: &Req) -> IdentityResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let mut builder = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .header("Content-Type", "application/json")
            .json(request);

        if !self.credential.is_anonymous() {
            builder = builder.bearer_auth(self.credential.token());
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::extract_error(method, response).await);
        }

        let body = response.bytes().await?;
        debug!(method, bytes = body.len(), "Identity service responded");
        serde_json::from_slice(&body).map_err(IdentityError::from)
    }

    async fn extract_error(method: &str, response: reqwest::Response) -> IdentityError {
        let status = response.status();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(method, status = %status, "Identity service rejected credential");
                IdentityError::Unauthorized
            }
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".into());
                warn!(method, status = %status, body = %message, "Identity service call failed");
                IdentityError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}

#[async_trait]
impl IdentityClient for RemoteIdentityClient {
    fn backend(&self) -> Backend {
        Backend::Remote
    }

    #[instrument(skip(self))]
    async fn get_profile(&self) -> IdentityResult<Profile> {
        let response: ProfileResponse = self.call("profile", &ProfileRequest::default()).await?;
        let profile = mappers::profile(response);
        debug!(phone_numbers = profile.phone_numbers.len(), "Fetched profile");
        Ok(profile)
    }

    #[instrument(skip(self, phone_number), fields(country_code = phone_number.country_code))]
    async fn register_phone_number(
        &self,
        phone_number: PhoneNumber,
    ) -> IdentityResult<RegisterPhoneResponse> {
        let request = mappers::register_phone_request(&phone_number);
        let response: RegisterPhoneNumberResponse =
            self.call("register_phone_number", &request).await?;
        let result = mappers::register_phone_response(response);
        debug!(kind = result.kind(), "Registered phone number");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn send_verification_code(&self, id: FieldId) -> IdentityResult<SendCodeResponse> {
        let request = mappers::send_code_request(id);
        let response: SendVerificationCodeResponse =
            self.call("send_verification_code", &request).await?;
        let result = mappers::send_code_response(response);
        debug!(?result, "Requested verification code");
        Ok(result)
    }

    #[instrument(skip(self, code))]
    async fn confirm_verification_code(
        &self,
        id: FieldId,
        code: &str,
    ) -> IdentityResult<ConfirmCodeResponse> {
        let request = mappers::confirm_code_request(id, code);
        let response: ConfirmVerificationCodeResponse =
            self.call("confirm_verification_code", &request).await?;
        let result = mappers::confirm_code_response(response);
        debug!(?result, "Confirmed verification code");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_client_creation() {
        let client = assert_ok!(RemoteIdentityClient::new(
            "http://localhost:8000/",
            Credential::anonymous(),
            Duration::from_secs(5),
        ));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_invalid_url_is_config_error() {
        let result =
            RemoteIdentityClient::new("not a url", Credential::anonymous(), Duration::from_secs(5));
        assert!(matches!(result, Err(IdentityError::Config(_))));
    }

    #[test]
    fn test_debug_hides_credential() {
        let client = RemoteIdentityClient::new(
            "http://localhost:8000",
            Credential::new("hunter2"),
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(!format!("{:?}", client).contains("hunter2"));
    }
}
