//! Wire types for the identity backend.
//!
//! Field names use underscore casing and outcomes are externally tagged
//! variants, e.g. `{"Success":{"id":42}}` or `"AlreadyRegistered"`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberWire {
    pub country_code: u16,
    pub number: String,
}

/// Empty argument record for the profile call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileRequest {}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPhoneNumberRequest {
    pub phone_number: PhoneNumberWire,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendVerificationCodeRequest {
    pub field_id: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmVerificationCodeRequest {
    pub field_id: u128,
    pub verification_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PhoneNumberStatusWire {
    Pending,
    Verified,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneNumberEntryWire {
    pub id: u128,
    pub status: PhoneNumberStatusWire,
    /// Unix epoch milliseconds
    pub added: u64,
    pub value: PhoneNumberWire,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileWire {
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumberEntryWire>,
}

#[derive(Debug, Clone, Deserialize)]
pub enum ProfileResponse {
    Success(ProfileWire),
    NotFound,
}

#[derive(Debug, Clone, Deserialize)]
pub enum RegisterPhoneNumberResponse {
    Success { id: u128 },
    AlreadyRegistered,
    AlreadyRegisteredByOther,
    InvalidPhoneNumber,
}

#[derive(Debug, Clone, Deserialize)]
pub enum SendVerificationCodeResponse {
    Success,
    AlreadySent,
    AlreadyVerified,
    NotFound,
}

#[derive(Debug, Clone, Deserialize)]
pub enum ConfirmVerificationCodeResponse {
    Success,
    AlreadyConfirmed,
    ConfirmationCodeIncorrect,
    ConfirmationCodeExpired,
    NotFound,
}
