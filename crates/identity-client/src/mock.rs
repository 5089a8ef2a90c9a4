//! In-process identity client for local development.

use crate::client::{Backend, IdentityClient};
use crate::error::IdentityResult;
use crate::types::*;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use uuid::Uuid;

/// Number placed on every mock profile.
const MOCK_COUNTRY_CODE: u16 = 44;
const MOCK_NUMBER: &str = "07867538921";

/// Generate a fresh field id from a time-based UUID.
///
/// The 32 hex digits of the UUID, separators removed, are read as one
/// base-16 integer. Unique in practice but not collision-proof, and the
/// version bits guarantee it is never zero.
pub fn new_field_id() -> FieldId {
    let node_id: [u8; 6] = rand::random();
    let uuid = Uuid::now_v1(&node_id);
    FieldId(uuid.as_u128())
}

/// Identity client that never leaves the process.
///
/// Every call waits `latency` before answering with a canned value.
#[derive(Clone, Debug)]
pub struct MockIdentityClient {
    latency: Duration,
}

impl MockIdentityClient {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn delay(&self) {
        sleep(self.latency).await;
    }
}

impl Default for MockIdentityClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl IdentityClient for MockIdentityClient {
    fn backend(&self) -> Backend {
        Backend::Mock
    }

    async fn get_profile(&self) -> IdentityResult<Profile> {
        info!("Getting mock profile");
        let profile = Profile::null().with_phone_number(PhoneNumberEntry {
            id: new_field_id(),
            status: VerificationStatus::Pending,
            added: u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default(),
            value: PhoneNumber::new(MOCK_COUNTRY_CODE, MOCK_NUMBER),
        });
        self.delay().await;
        Ok(profile)
    }

    async fn register_phone_number(
        &self,
        _phone_number: PhoneNumber,
    ) -> IdentityResult<RegisterPhoneResponse> {
        info!("Registering mock phone number");
        self.delay().await;
        Ok(RegisterPhoneResponse::Success { id: new_field_id() })
    }

    async fn send_verification_code(&self, _id: FieldId) -> IdentityResult<SendCodeResponse> {
        self.delay().await;
        Ok(SendCodeResponse::Success)
    }

    async fn confirm_verification_code(
        &self,
        _id: FieldId,
        _code: &str,
    ) -> IdentityResult<ConfirmCodeResponse> {
        self.delay().await;
        Ok(ConfirmCodeResponse::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tokio::time::Instant;

    #[test]
    fn test_field_id_matches_hex_of_uuid() {
        let uuid = Uuid::now_v1(&[1, 2, 3, 4, 5, 6]);
        let stripped = uuid.hyphenated().to_string().replace('-', "");
        assert_eq!(stripped.len(), 32);
        assert_eq!(u128::from_str_radix(&stripped, 16).unwrap(), uuid.as_u128());
    }

    #[test]
    fn test_field_ids_are_non_zero_and_distinct() {
        let ids: HashSet<FieldId> = (0..1000).map(|_| new_field_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.as_u128() != 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_profile_waits_for_latency() {
        let client = MockIdentityClient::new(Duration::from_secs(1));
        let start = Instant::now();

        let profile = client.get_profile().await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(profile.phone_numbers.len(), 1);
        let entry = &profile.phone_numbers[0];
        assert_eq!(entry.status, VerificationStatus::Pending);
        assert_ne!(entry.id.as_u128(), 0);
        assert_eq!(entry.value, PhoneNumber::new(44, "07867538921"));
        assert!(entry.added_at().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_profile_ids_differ_between_calls() {
        let client = MockIdentityClient::default();
        let first = client.get_profile().await.unwrap();
        let second = client.get_profile().await.unwrap();
        assert_ne!(first.phone_numbers[0].id, second.phone_numbers[0].id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_succeeds_with_fresh_id() {
        let client = MockIdentityClient::new(Duration::from_millis(500));
        let start = Instant::now();

        let result = client
            .register_phone_number(PhoneNumber::new(1, "4155551234"))
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(result.kind(), "register_phone_success");
        assert_ne!(result.field_id().unwrap().as_u128(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_code_operations_succeed_after_latency() {
        let client = MockIdentityClient::new(Duration::from_secs(2));

        let start = Instant::now();
        let sent = client.send_verification_code(FieldId(1)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(sent, SendCodeResponse::Success);

        let start = Instant::now();
        let confirmed = client
            .confirm_verification_code(FieldId(1), "000000")
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(confirmed, ConfirmCodeResponse::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_ready_before_latency() {
        let client = MockIdentityClient::new(Duration::from_secs(1));
        let pending = client.send_verification_code(FieldId(1));

        let early = tokio::time::timeout(Duration::from_millis(999), pending).await;
        assert!(early.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_registrations_are_independent() {
        let client = MockIdentityClient::default();
        let (a, b) = tokio::join!(
            client.register_phone_number(PhoneNumber::new(44, "1")),
            client.register_phone_number(PhoneNumber::new(44, "1")),
        );
        assert_ne!(a.unwrap().field_id(), b.unwrap().field_id());
    }
}
