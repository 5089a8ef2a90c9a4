//! Identity domain types.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque correlation key issued by the backend when a phone number is
/// registered. Used by the send-code and confirm-code steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u128);

impl FieldId {
    pub fn as_u128(self) -> u128 {
        self.0
    }
}

impl From<u128> for FieldId {
    fn from(id: u128) -> Self {
        Self(id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u128>().map(Self)
    }
}

/// A phone number as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    pub country_code: u16,
    pub number: String,
}

impl PhoneNumber {
    pub fn new(country_code: u16, number: impl Into<String>) -> Self {
        Self {
            country_code,
            number: number.into(),
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.country_code, self.number)
    }
}

/// Verification state of a registered phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Registered, waiting for the code to be confirmed
    Pending,
    /// Code confirmed
    Verified,
}

/// A phone number attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberEntry {
    pub id: FieldId,
    pub status: VerificationStatus,
    /// Unix epoch milliseconds
    pub added: u64,
    pub value: PhoneNumber,
}

impl PhoneNumberEntry {
    /// When the number was added, if the timestamp is representable.
    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.added).ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }
}

/// A user's identity profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub phone_numbers: Vec<PhoneNumberEntry>,
}

impl Profile {
    /// The empty profile of an unauthenticated or unknown user.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.phone_numbers.is_empty()
    }

    /// Return a copy of this profile with `entry` appended.
    pub fn with_phone_number(&self, entry: PhoneNumberEntry) -> Self {
        let mut phone_numbers = self.phone_numbers.clone();
        phone_numbers.push(entry);
        Self { phone_numbers }
    }

    /// Look up a phone number by its field id.
    pub fn phone_number(&self, id: FieldId) -> Option<&PhoneNumberEntry> {
        self.phone_numbers.iter().find(|p| p.id == id)
    }
}

/// Outcome of registering a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum RegisterPhoneResponse {
    #[serde(rename = "register_phone_success")]
    Success { id: FieldId },
    #[serde(rename = "register_phone_already_registered")]
    AlreadyRegistered,
    #[serde(rename = "register_phone_already_registered_by_another_user")]
    AlreadyRegisteredByAnotherUser,
    #[serde(rename = "register_phone_invalid_number")]
    InvalidNumber,
}

impl RegisterPhoneResponse {
    /// The wire-independent tag of this outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "register_phone_success",
            Self::AlreadyRegistered => "register_phone_already_registered",
            Self::AlreadyRegisteredByAnotherUser => {
                "register_phone_already_registered_by_another_user"
            }
            Self::InvalidNumber => "register_phone_invalid_number",
        }
    }

    /// The field id assigned on success.
    pub fn field_id(&self) -> Option<FieldId> {
        match self {
            Self::Success { id } => Some(*id),
            _ => None,
        }
    }
}

/// Outcome of asking the backend to send a verification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SendCodeResponse {
    Success,
    AlreadySent,
    AlreadyVerified,
    NotFound,
}

/// Outcome of confirming a verification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmCodeResponse {
    Success,
    AlreadyConfirmed,
    CodeIncorrect,
    CodeExpired,
    NotFound,
}
