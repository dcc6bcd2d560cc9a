//! Lead sinks: where accepted contact submissions are written.
//!
//! A sink performs exactly one insert per call. It never retries and applies
//! no timeout of its own; the outcome is reduced to success or [`SinkError`].

mod postgres;
mod rest;

pub use postgres::PgSink;
pub use rest::RestSink;

use crate::config::{Config, SinkConfig};
use crate::contact::ContactSubmission;
use anyhow::{bail, Result};
use futures::future::BoxFuture;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// External collection that stores contact submissions.
pub trait LeadSink: Send + Sync {
    /// Insert one record.
    fn insert<'a>(&'a self, record: &'a ContactSubmission) -> BoxFuture<'a, Result<(), SinkError>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("request to lead sink failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("lead sink rejected insert ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("database insert failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Table names are spliced into SQL and URLs, so only plain identifiers pass.
pub fn is_valid_table_name(table: &str) -> bool {
    let mut chars = table.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    table.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Build the sink selected by the configuration.
pub async fn connect(config: &Config) -> Result<Arc<dyn LeadSink>> {
    if !is_valid_table_name(&config.contact_table) {
        bail!("Invalid contact table name: '{}'", config.contact_table);
    }

    let sink: Arc<dyn LeadSink> = match &config.sink {
        SinkConfig::Postgres { database_url } => {
            Arc::new(PgSink::connect(database_url, &config.contact_table).await?)
        }
        SinkConfig::Rest { url, api_key } => {
            Arc::new(RestSink::new(url, api_key, &config.contact_table))
        }
    };

    info!(
        "Contact submissions go to '{}' via {} sink",
        config.contact_table,
        sink.name()
    );
    Ok(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        assert!(is_valid_table_name("contact_submissions"));
        assert!(is_valid_table_name("_leads2"));
    }

    #[test]
    fn test_invalid_table_names() {
        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("2leads"));
        assert!(!is_valid_table_name("leads; DROP TABLE users"));
        assert!(!is_valid_table_name("public.leads"));
        assert!(!is_valid_table_name(&"a".repeat(64)));
    }

    #[test]
    fn test_rejected_error_message() {
        let err = SinkError::Rejected {
            status: 401,
            body: "Invalid API key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "lead sink rejected insert (401): Invalid API key"
        );
    }
}
