use anyhow::{bail, Result};
use std::time::Duration;

/// Where contact submissions are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkConfig {
    /// Direct connection to PostgreSQL
    Postgres { database_url: String },

    /// Hosted table behind a REST API
    Rest { url: String, api_key: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Lead sink
    pub sink: SinkConfig,
    pub contact_table: String,

    // Contact form
    pub status_display_window: Duration,

    // Sessions
    pub session_ttl: Duration,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // DATABASE_URL wins over the REST sink when both are set
        let sink = match (
            non_empty("DATABASE_URL"),
            non_empty("LEAD_SINK_URL"),
            non_empty("LEAD_SINK_KEY"),
        ) {
            (Some(database_url), _, _) => SinkConfig::Postgres { database_url },
            (None, Some(url), Some(api_key)) => SinkConfig::Rest { url, api_key },
            (None, Some(_), None) => bail!("LEAD_SINK_KEY not set (required with LEAD_SINK_URL)"),
            (None, None, _) => bail!("No lead sink configured: set DATABASE_URL or LEAD_SINK_URL"),
        };

        let ttl_minutes: u64 = lookup("SESSION_TTL_MINUTES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);
        let session_ttl = match ttl_minutes.checked_mul(60) {
            Some(secs) => Duration::from_secs(secs),
            None => bail!("SESSION_TTL_MINUTES is too large: {}", ttl_minutes),
        };

        Ok(Self {
            // Server
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Lead sink
            sink,
            contact_table: non_empty("CONTACT_TABLE")
                .unwrap_or_else(|| "contact_submissions".to_string()),

            // Contact form
            status_display_window: Duration::from_secs(
                lookup("STATUS_DISPLAY_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),

            // Sessions
            session_ttl,
            max_sessions: lookup("MAX_SESSIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_rest_sink_with_defaults() {
        let config = config_from(&[
            ("LEAD_SINK_URL", "https://db.example.com"),
            ("LEAD_SINK_KEY", "anon-key"),
        ])
        .expect("Should load");

        assert_eq!(
            config.sink,
            SinkConfig::Rest {
                url: "https://db.example.com".to_string(),
                api_key: "anon-key".to_string(),
            }
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.contact_table, "contact_submissions");
        assert_eq!(config.status_display_window, Duration::from_secs(5));
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert_eq!(config.max_sessions, 10_000);
    }

    #[test]
    fn test_database_url_takes_precedence() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://u:p@localhost/site"),
            ("LEAD_SINK_URL", "https://db.example.com"),
            ("LEAD_SINK_KEY", "anon-key"),
        ])
        .unwrap();

        assert!(matches!(config.sink, SinkConfig::Postgres { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("PORT", "3000"),
            ("CONTACT_TABLE", "leads"),
            ("STATUS_DISPLAY_SECS", "2"),
            ("SESSION_TTL_MINUTES", "15"),
            ("MAX_SESSIONS", "500"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.contact_table, "leads");
        assert_eq!(config.status_display_window, Duration::from_secs(2));
        assert_eq!(config.session_ttl, Duration::from_secs(900));
        assert_eq!(config.max_sessions, 500);
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("PORT", "not-a-port"),
            ("STATUS_DISPLAY_SECS", "-1"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.status_display_window, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_sink_is_an_error() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("No lead sink configured"));
    }

    #[test]
    fn test_rest_sink_requires_key() {
        let err = config_from(&[("LEAD_SINK_URL", "https://db.example.com")]).unwrap_err();
        assert!(err.to_string().contains("LEAD_SINK_KEY"));
    }

    #[test]
    fn test_blank_database_url_is_ignored() {
        let config = config_from(&[
            ("DATABASE_URL", "  "),
            ("LEAD_SINK_URL", "https://db.example.com"),
            ("LEAD_SINK_KEY", "k"),
        ])
        .unwrap();

        assert!(matches!(config.sink, SinkConfig::Rest { .. }));
    }

    #[test]
    fn test_session_ttl_overflow_is_an_error() {
        let max = u64::MAX.to_string();
        let err = config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("SESSION_TTL_MINUTES", max.as_str()),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("SESSION_TTL_MINUTES is too large"));
    }

    #[test]
    fn test_largest_session_ttl_that_fits() {
        let minutes = (u64::MAX / 60).to_string();
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("SESSION_TTL_MINUTES", minutes.as_str()),
        ])
        .unwrap();

        assert_eq!(config.session_ttl, Duration::from_secs(u64::MAX / 60 * 60));
    }
}
