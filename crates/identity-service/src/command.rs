//! Command-line operations for the identity CLI.

use crate::error::{AppError, AppResult};
use crate::service::IdentityService;
use identity_client::{FieldId, PhoneNumber};

pub const USAGE: &str = "identity-cli <profile | register <country_code> <number> | \
send-code <field_id> | confirm-code <field_id> <code>>";

/// One identity operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Profile,
    Register(PhoneNumber),
    SendCode(FieldId),
    ConfirmCode { id: FieldId, code: String },
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> AppResult<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        match args.as_slice() {
            ["profile"] => Ok(Self::Profile),
            ["register", country_code, number] => {
                let country_code = country_code
                    .trim_start_matches('+')
                    .parse::<u16>()
                    .map_err(|e| usage(format!("invalid country code '{}': {}", country_code, e)))?;
                Ok(Self::Register(PhoneNumber::new(country_code, *number)))
            }
            ["send-code", id] => Ok(Self::SendCode(parse_field_id(id)?)),
            ["confirm-code", id, code] => Ok(Self::ConfirmCode {
                id: parse_field_id(id)?,
                code: code.to_string(),
            }),
            _ => Err(usage(USAGE.to_string())),
        }
    }

    /// Operation name, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Register(_) => "register",
            Self::SendCode(_) => "send-code",
            Self::ConfirmCode { .. } => "confirm-code",
        }
    }

    /// Run the command and render the outcome as pretty JSON.
    pub async fn run(&self, service: &IdentityService) -> AppResult<String> {
        let output = match self {
            Self::Profile => serde_json::to_string_pretty(&service.get_profile().await?)?,
            Self::Register(phone_number) => serde_json::to_string_pretty(
                &service.register_phone_number(phone_number.clone()).await?,
            )?,
            Self::SendCode(id) => {
                serde_json::to_string_pretty(&service.send_verification_code(*id).await?)?
            }
            Self::ConfirmCode { id, code } => serde_json::to_string_pretty(
                &service.confirm_verification_code(*id, code).await?,
            )?,
        };
        Ok(output)
    }
}

fn parse_field_id(raw: &str) -> AppResult<FieldId> {
    raw.parse::<FieldId>()
        .map_err(|e| usage(format!("invalid field id '{}': {}", raw, e)))
}

fn usage(message: String) -> AppError {
    AppError::Usage(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        assert_eq!(Command::parse(&["profile"]).unwrap(), Command::Profile);
    }

    #[test]
    fn test_parse_register() {
        assert_eq!(
            Command::parse(&["register", "+44", "07867538921"]).unwrap(),
            Command::Register(PhoneNumber::new(44, "07867538921"))
        );
        assert!(matches!(
            Command::parse(&["register", "uk", "07867538921"]),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_code_commands() {
        assert_eq!(
            Command::parse(&["send-code", "123"]).unwrap(),
            Command::SendCode(FieldId(123))
        );
        assert_eq!(
            Command::parse(&["confirm-code", "123", "000111"]).unwrap(),
            Command::ConfirmCode {
                id: FieldId(123),
                code: "000111".into()
            }
        );
        assert!(Command::parse(&["send-code", "-1"]).is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let empty: [&str; 0] = [];
        assert!(matches!(Command::parse(&empty), Err(AppError::Usage(_))));
        assert!(matches!(
            Command::parse(&["profile", "extra"]),
            Err(AppError::Usage(_))
        ));
    }
}
