use super::{LeadSink, SinkError};
use crate::contact::ContactSubmission;
use futures::future::BoxFuture;
use tracing::debug;

/// Hosted table behind a PostgREST-style API (`POST /rest/v1/{table}`).
#[derive(Debug, Clone)]
pub struct RestSink {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestSink {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.to_string(),
        }
    }
}

impl LeadSink for RestSink {
    fn insert<'a>(&'a self, record: &'a ContactSubmission) -> BoxFuture<'a, Result<(), SinkError>> {
        Box::pin(async move {
            debug!("Inserting contact submission via {}", self.endpoint);

            let response = self
                .client
                .post(&self.endpoint)
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key)
                .header("Prefer", "return=minimal")
                .json(&[record])
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(SinkError::Rejected { status, body });
            }

            Ok(())
        })
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactFields;
    use crate::i18n::Language;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn jane(language: Language) -> ContactSubmission {
        let fields = ContactFields {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        ContactSubmission::new(&fields, language)
    }

    // ==================== Endpoint Tests ====================

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let sink = RestSink::new("https://db.example.com/", "key", "contact_submissions");
        assert_eq!(
            sink.endpoint,
            "https://db.example.com/rest/v1/contact_submissions"
        );
    }

    // ==================== Insert Tests ====================

    #[tokio::test]
    async fn test_insert_sends_record_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/contact_submissions"))
            .and(header("apikey", "anon-key"))
            .and(header("Authorization", "Bearer anon-key"))
            .and(header("Prefer", "return=minimal"))
            .and(body_json(json!([{
                "name": "Jane",
                "email": "jane@x.com",
                "phone": "",
                "subject": "Hi",
                "message": "Hello",
                "language": "en"
            }])))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sink = RestSink::new(&mock_server.uri(), "anon-key", "contact_submissions");
        let result = sink.insert(&jane(Language::ENGLISH)).await;

        assert!(result.is_ok(), "{:?}", result);
    }

    #[tokio::test]
    async fn test_insert_tags_language() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/leads"))
            .and(body_json(json!([{
                "name": "Jane",
                "email": "jane@x.com",
                "phone": "",
                "subject": "Hi",
                "message": "Hello",
                "language": "ar"
            }])))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sink = RestSink::new(&mock_server.uri(), "anon-key", "leads");
        assert!(sink.insert(&jane(Language::ARABIC)).await.is_ok());
    }

    #[tokio::test]
    async fn test_insert_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/contact_submissions"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"message":"Invalid API key"}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let sink = RestSink::new(&mock_server.uri(), "wrong", "contact_submissions");
        let err = sink
            .insert(&jane(Language::ENGLISH))
            .await
            .expect_err("Should be rejected");

        match err {
            SinkError::Rejected { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Invalid API key"));
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sink = RestSink::new(&mock_server.uri(), "key", "contact_submissions");
        assert!(sink.insert(&jane(Language::FRENCH)).await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_sink_is_transport_error() {
        // Nothing listens on port 9 (discard) on the loopback interface
        let sink = RestSink::new("http://127.0.0.1:9", "key", "contact_submissions");
        let err = sink
            .insert(&jane(Language::ENGLISH))
            .await
            .expect_err("Should fail");

        assert!(matches!(err, SinkError::Transport(_)));
    }
}
