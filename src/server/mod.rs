//! HTTP surface of the site.
//!
//! - `GET /`: the localized page for the visitor's session
//! - `POST /language`: switch the session language (`lang` form field)
//! - `POST /contact`: submit the contact form, then redirect to `/#contact`
//! - `GET /health`: liveness probe

mod session;

pub use session::{session_cookie, session_id, Session, SessionRegistry, SESSION_COOKIE};

use crate::config::Config;
use crate::contact::{ContactFields, FormSnapshot, SubmissionError, SubmissionMetrics};
use crate::i18n::{Language, LocaleSnapshot};
use crate::sink::LeadSink;
use crate::site;
use anyhow::{Context, Result};
use axum::extract::{Form, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::Datelike;
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(config: &Config, sink: Arc<dyn LeadSink>) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::new(
                sink,
                SubmissionMetrics::global(),
                config.status_display_window,
                config.session_ttl,
                config.max_sessions,
            )),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownLanguage(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub lang: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/language", post(switch_language))
        .route("/contact", post(submit_contact))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

/// Visitors without a session see the default page; no session is started.
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let year = chrono::Utc::now().year();

    match state.sessions.get(session_id(&headers).as_deref()) {
        Some((id, session)) => {
            let page = site::render_page(
                &session.locale.snapshot(),
                &session.contact.snapshot(),
                year,
            );
            ([(header::SET_COOKIE, session_cookie(&id))], Html(page)).into_response()
        }
        None => {
            let page = site::render_page(
                &LocaleSnapshot::from(Language::canonical()),
                &FormSnapshot::default(),
                year,
            );
            Html(page).into_response()
        }
    }
}

async fn switch_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LanguageForm>,
) -> Result<impl IntoResponse, AppError> {
    let language =
        Language::from_code(&form.lang).map_err(|_| AppError::UnknownLanguage(form.lang.clone()))?;

    let (id, session) = state.sessions.get_or_create(session_id(&headers).as_deref());
    session.locale.set_language(language);

    Ok((
        [(header::SET_COOKIE, session_cookie(&id))],
        Redirect::to("/"),
    ))
}

async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(fields): Form<ContactFields>,
) -> impl IntoResponse {
    let (id, session) = state.sessions.get_or_create(session_id(&headers).as_deref());
    let language = session.locale.language();

    // The outcome is shown through the form status on the next render
    match session.contact.submit(fields, language).await {
        Ok(()) => {}
        Err(SubmissionError::InFlight) => warn!("Duplicate contact submission for session {}", id),
        Err(e) => debug!("Contact submission for session {} not stored: {}", id, e),
    }

    (
        [(header::SET_COOKIE, session_cookie(&id))],
        Redirect::to("/#contact"),
    )
}

async fn health() -> &'static str {
    "OK"
}
