//! Translation between wire shapes and domain types.
//!
//! Every function here is pure. The response mappers match exhaustively, so
//! a new wire variant fails to compile until it is given a domain outcome.

use crate::types::*;
use crate::wire::*;

pub fn phone_number_wire(phone_number: &PhoneNumber) -> PhoneNumberWire {
    PhoneNumberWire {
        country_code: phone_number.country_code,
        number: phone_number.number.clone(),
    }
}

pub fn register_phone_request(phone_number: &PhoneNumber) -> RegisterPhoneNumberRequest {
    RegisterPhoneNumberRequest {
        phone_number: phone_number_wire(phone_number),
    }
}

pub fn send_code_request(id: FieldId) -> SendVerificationCodeRequest {
    SendVerificationCodeRequest { field_id: id.0 }
}

pub fn confirm_code_request(id: FieldId, code: &str) -> ConfirmVerificationCodeRequest {
    ConfirmVerificationCodeRequest {
        field_id: id.0,
        verification_code: code.to_string(),
    }
}

fn phone_number(wire: PhoneNumberWire) -> PhoneNumber {
    PhoneNumber {
        country_code: wire.country_code,
        number: wire.number,
    }
}

fn status(wire: PhoneNumberStatusWire) -> VerificationStatus {
    match wire {
        PhoneNumberStatusWire::Pending => VerificationStatus::Pending,
        PhoneNumberStatusWire::Verified => VerificationStatus::Verified,
    }
}

fn phone_number_entry(wire: PhoneNumberEntryWire) -> PhoneNumberEntry {
    PhoneNumberEntry {
        id: FieldId(wire.id),
        status: status(wire.status),
        added: wire.added,
        value: phone_number(wire.value),
    }
}

pub fn profile(wire: ProfileResponse) -> Profile {
    match wire {
        ProfileResponse::Success(p) => Profile {
            phone_numbers: p.phone_numbers.into_iter().map(phone_number_entry).collect(),
        },
        ProfileResponse::NotFound => Profile::null(),
    }
}

pub fn register_phone_response(wire: RegisterPhoneNumberResponse) -> RegisterPhoneResponse {
    match wire {
        RegisterPhoneNumberResponse::Success { id } => {
            RegisterPhoneResponse::Success { id: FieldId(id) }
        }
        RegisterPhoneNumberResponse::AlreadyRegistered => RegisterPhoneResponse::AlreadyRegistered,
        RegisterPhoneNumberResponse::AlreadyRegisteredByOther => {
            RegisterPhoneResponse::AlreadyRegisteredByAnotherUser
        }
        RegisterPhoneNumberResponse::InvalidPhoneNumber => RegisterPhoneResponse::InvalidNumber,
    }
}

pub fn send_code_response(wire: SendVerificationCodeResponse) -> SendCodeResponse {
    match wire {
        SendVerificationCodeResponse::Success => SendCodeResponse::Success,
        SendVerificationCodeResponse::AlreadySent => SendCodeResponse::AlreadySent,
        SendVerificationCodeResponse::AlreadyVerified => SendCodeResponse::AlreadyVerified,
        SendVerificationCodeResponse::NotFound => SendCodeResponse::NotFound,
    }
}

pub fn confirm_code_response(wire: ConfirmVerificationCodeResponse) -> ConfirmCodeResponse {
    match wire {
        ConfirmVerificationCodeResponse::Success => ConfirmCodeResponse::Success,
        ConfirmVerificationCodeResponse::AlreadyConfirmed => ConfirmCodeResponse::AlreadyConfirmed,
        ConfirmVerificationCodeResponse::ConfirmationCodeIncorrect => {
            ConfirmCodeResponse::CodeIncorrect
        }
        ConfirmVerificationCodeResponse::ConfirmationCodeExpired => {
            ConfirmCodeResponse::CodeExpired
        }
        ConfirmVerificationCodeResponse::NotFound => ConfirmCodeResponse::NotFound,
    }
}
