//! Contact submission flow.
//!
//! - `validate`: form fields and the input checks that run before sending
//! - `form`: the idle / sending / success / error state machine
//! - `metrics`: process-wide submission counters

mod form;
mod metrics;
mod validate;

pub use form::{
    ContactForm, FormSnapshot, SubmissionError, SubmissionStatus, STATUS_DISPLAY_WINDOW,
};
pub use metrics::{MetricsReport, SubmissionMetrics};
pub use validate::{is_valid_email, ContactFields, Field, ValidationError};

use crate::i18n::Language;
use serde::Serialize;

/// The record handed to the lead sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    /// Language active when the form was sent
    pub language: Language,
}

impl ContactSubmission {
    /// Tag the visitor's input with the active language.
    ///
    /// The email is trimmed the way an email input sanitizes its value;
    /// every other field is kept verbatim.
    pub fn new(fields: &ContactFields, language: Language) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_json_shape() {
        let fields = ContactFields {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };

        let record = ContactSubmission::new(&fields, Language::ENGLISH);

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "Jane",
                "email": "jane@x.com",
                "phone": "",
                "subject": "Hi",
                "message": "Hello",
                "language": "en"
            })
        );
    }

    #[test]
    fn test_submission_trims_email_only() {
        let fields = ContactFields {
            name: " Jane ".to_string(),
            email: " jane@x.com ".to_string(),
            phone: String::new(),
            subject: "Hi".to_string(),
            message: "Hello\n".to_string(),
        };

        let record = ContactSubmission::new(&fields, Language::FRENCH);

        assert_eq!(record.email, "jane@x.com");
        assert_eq!(record.name, " Jane ");
        assert_eq!(record.message, "Hello\n");
        assert_eq!(record.language, Language::FRENCH);
    }
}
