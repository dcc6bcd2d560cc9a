//! Per-visitor sessions.
//!
//! Each visitor gets their own localization store and contact form, keyed by
//! a random id held in the `novaytek_sid` cookie. A session is only started
//! by a visitor action (language switch or contact post); plain page views
//! without a cookie never allocate one.
//!
//! Expired sessions are swept at most once per [`PRUNE_INTERVAL`], and the
//! registry never holds more than its configured maximum: at the limit the
//! least recently seen session is evicted.

use crate::contact::{ContactForm, SubmissionMetrics};
use crate::i18n::LocalizationStore;
use crate::sink::LeadSink;
use axum::http::{header, HeaderMap};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "novaytek_sid";

/// Minimum time between two sweeps of expired sessions.
pub const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

/// State of one visitor.
pub struct Session {
    pub locale: LocalizationStore,
    pub contact: ContactForm,
}

struct Entry {
    session: Arc<Session>,
    last_seen: Instant,
}

struct Sessions {
    entries: HashMap<String, Entry>,
    last_prune: Instant,
}

pub struct SessionRegistry {
    sessions: Mutex<Sessions>,
    sink: Arc<dyn LeadSink>,
    metrics: &'static SubmissionMetrics,
    display_window: Duration,
    ttl: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(
        sink: Arc<dyn LeadSink>,
        metrics: &'static SubmissionMetrics,
        display_window: Duration,
        ttl: Duration,
        max_sessions: usize,
    ) -> Self {
        Self {
            sessions: Mutex::new(Sessions {
                entries: HashMap::new(),
                last_prune: Instant::now(),
            }),
            sink,
            metrics,
            display_window,
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// The live session for `id`, if there is one. Never creates a session.
    pub fn get(&self, id: Option<&str>) -> Option<(String, Arc<Session>)> {
        let now = Instant::now();
        let mut sessions = self.lock();
        self.prune_if_due(&mut sessions, now);

        let id = id?;
        let entry = sessions.entries.get_mut(id)?;
        if now.duration_since(entry.last_seen) < self.ttl {
            entry.last_seen = now;
            return Some((id.to_string(), Arc::clone(&entry.session)));
        }

        sessions.entries.remove(id);
        None
    }

    /// The live session for `id`, or a new one.
    ///
    /// Ids that are unknown or expired are never reused; the visitor gets a
    /// freshly generated id instead.
    pub fn get_or_create(&self, id: Option<&str>) -> (String, Arc<Session>) {
        if let Some(found) = self.get(id) {
            return found;
        }

        let now = Instant::now();
        let mut sessions = self.lock();

        if sessions.entries.len() >= self.max_sessions {
            self.prune(&mut sessions, now);
        }
        if sessions.entries.len() >= self.max_sessions {
            let oldest = sessions
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone());
            if let Some(oldest) = oldest {
                warn!("Session limit ({}) reached, evicting {}", self.max_sessions, oldest);
                sessions.entries.remove(&oldest);
            }
        }

        let id = Uuid::new_v4().to_string();
        let session = Arc::new(Session {
            locale: LocalizationStore::new(),
            contact: ContactForm::new(Arc::clone(&self.sink))
                .with_display_window(self.display_window)
                .with_metrics(self.metrics),
        });
        sessions.entries.insert(
            id.clone(),
            Entry {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );
        debug!("Started session {}", id);

        (id, session)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune_if_due(&self, sessions: &mut Sessions, now: Instant) {
        if now.duration_since(sessions.last_prune) >= PRUNE_INTERVAL {
            self.prune(sessions, now);
        }
    }

    fn prune(&self, sessions: &mut Sessions, now: Instant) {
        let before = sessions.entries.len();
        sessions
            .entries
            .retain(|_, entry| now.duration_since(entry.last_seen) < self.ttl);
        sessions.last_prune = now;

        if sessions.entries.len() < before {
            debug!("Pruned {} expired sessions", before - sessions.entries.len());
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Session id from the request's `Cookie` headers.
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// `Set-Cookie` value for a session id.
pub fn session_cookie(id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}
