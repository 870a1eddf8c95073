use lettre::Address;
use serde::{Deserialize, Serialize};

use crate::error::ContactError;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;
pub const MAX_AREA_LEN: usize = 50;

/// Contact form body as sent by the landing page. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Radio group value on the form ("vermietung", "unternehmen", ...).
    #[serde(default)]
    pub bereich: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct ValidatedContactRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub reply_to: Address,
    pub message: &'a str,
    pub area: Option<&'a str>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ContactResponse {
    pub message: String,
}

fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
    max_len: usize,
) -> Result<&'a str, ContactError> {
    let value = value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ContactError::validation(field, "must not be empty"))?;
    if value.chars().count() > max_len {
        return Err(ContactError::validation(
            field,
            format!("longer than {} characters", max_len),
        ));
    }
    Ok(value)
}

impl ContactRequest {
    pub fn validate(&self) -> Result<ValidatedContactRequest<'_>, ContactError> {
        let name = required("name", &self.name, MAX_NAME_LEN)?;
        let email = required("email", &self.email, MAX_EMAIL_LEN)?;
        let message = required("message", &self.message, MAX_MESSAGE_LEN)?;

        let reply_to = email.parse::<Address>().map_err(|e| ContactError::Address {
            address: email.to_string(),
            source: e,
        })?;

        let area = match self.bereich.as_deref().map(str::trim) {
            Some(area) if area.chars().count() > MAX_AREA_LEN => {
                return Err(ContactError::validation(
                    "bereich",
                    format!("longer than {} characters", MAX_AREA_LEN),
                ));
            }
            Some(area) if !area.is_empty() => Some(area),
            _ => None,
        };

        Ok(ValidatedContactRequest {
            name,
            email,
            reply_to,
            message,
            area,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
            bereich: None,
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        let req = request(" Max ", "max@example.com", "Interesse an KI-Lösungen");
        let validated = req.validate().unwrap();
        assert_eq!(validated.name, "Max");
        assert_eq!(validated.email, "max@example.com");
        assert_eq!(validated.message, "Interesse an KI-Lösungen");
        assert_eq!(validated.area, None);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let req: ContactRequest = serde_json::from_str(r#"{"name":"Max"}"#).unwrap();
        match req.validate() {
            Err(ContactError::Validation { field, .. }) => assert_eq!(field, "email"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let req = request("Max", "max@example.com", "   \n ");
        assert!(matches!(
            req.validate(),
            Err(ContactError::Validation { field: "message", .. })
        ));
    }

    #[test]
    fn overlong_message_is_rejected() {
        let req = request("Max", "max@example.com", &"a".repeat(MAX_MESSAGE_LEN + 1));
        assert!(matches!(
            req.validate(),
            Err(ContactError::Validation { field: "message", .. })
        ));
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        let req = request(&"ä".repeat(MAX_NAME_LEN), "max@example.com", "Hallo");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let req = request("Max", "not-an-address", "Hallo");
        assert!(matches!(req.validate(), Err(ContactError::Address { .. })));
    }

    #[test]
    fn area_is_optional_and_trimmed() {
        let mut req = request("Max", "max@example.com", "Hallo");
        req.bereich = Some(" unternehmen ".to_string());
        assert_eq!(req.validate().unwrap().area, Some("unternehmen"));

        req.bereich = Some(String::new());
        assert_eq!(req.validate().unwrap().area, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req: ContactRequest = serde_json::from_str(
            r#"{"name":"Max","email":"max@example.com","message":"Hi","phone":"123"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }
}
