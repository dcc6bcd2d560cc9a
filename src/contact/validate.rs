//! Contact form fields and input checks.
//!
//! Only what the form's input constraints enforce: required fields must be
//! non-blank and the email field must satisfy the HTML `type=email` rule.

use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    /// Optional; an empty string when not given
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A form field, named as in the form markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field '{0}' is empty")]
    Missing(Field),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

// HTML living standard "valid email address" production
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern should compile")
    })
}

/// Whether `value` would be accepted by an `<input type="email">`.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

impl ContactFields {
    /// `true` when every field is an empty string.
    pub fn is_empty(&self) -> bool {
        self == &ContactFields::default()
    }

    /// Check required fields in form order, then the email format.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.trim().to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn jane() -> ContactFields {
        ContactFields {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    // ==================== Required Field Tests ====================

    #[test]
    fn test_complete_form_is_valid() {
        assert_eq!(jane().validate(), Ok(()));
    }

    #[test]
    fn test_phone_is_optional() {
        let mut fields = jane();
        fields.phone = "+1 (555) 123-4567".to_string();
        assert!(fields.validate().is_ok());

        fields.phone.clear();
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_missing_name() {
        let mut fields = jane();
        fields.name.clear();
        assert_eq!(fields.validate(), Err(ValidationError::Missing(Field::Name)));
    }

    #[test]
    fn test_blank_message_counts_as_missing() {
        let mut fields = jane();
        fields.message = "  \n\t ".to_string();
        assert_eq!(
            fields.validate(),
            Err(ValidationError::Missing(Field::Message))
        );
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        assert_eq!(
            ContactFields::default().validate(),
            Err(ValidationError::Missing(Field::Name))
        );
    }

    // ==================== Email Tests ====================

    #[test]
    fn test_email_examples() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(is_valid_email("user@localhost"));
        assert!(is_valid_email("  padded@example.com "));

        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane@-x.com"));
        assert!(!is_valid_email("ja ne@x.com"));
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let mut fields = jane();
        fields.email = "not-an-email".to_string();
        assert_eq!(
            fields.validate(),
            Err(ValidationError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Missing(Field::Subject).to_string(),
            "required field 'subject' is empty"
        );
    }

    // ==================== Misc Tests ====================

    #[test]
    fn test_is_empty() {
        assert!(ContactFields::default().is_empty());
        assert!(!jane().is_empty());
    }

    #[test]
    fn test_deserialize_without_phone() {
        let fields: ContactFields = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@x.com","subject":"Hi","message":"Hello"}"#,
        )
        .unwrap();
        assert_eq!(fields, jane());
    }

    proptest! {
        #[test]
        fn prop_blank_required_field_is_rejected(which in 0usize..4, blank in "[ \t\n]{0,4}") {
            let mut fields = jane();
            let target = match which {
                0 => &mut fields.name,
                1 => &mut fields.email,
                2 => &mut fields.subject,
                _ => &mut fields.message,
            };
            *target = blank;
            prop_assert!(matches!(fields.validate(), Err(ValidationError::Missing(_))));
        }

        #[test]
        fn prop_any_phone_is_accepted(phone in ".{0,40}") {
            let mut fields = jane();
            fields.phone = phone;
            prop_assert!(fields.validate().is_ok());
        }
    }
}
