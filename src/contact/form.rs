use super::{ContactFields, ContactSubmission, SubmissionMetrics, ValidationError};
use crate::i18n::Language;
use crate::sink::{LeadSink, SinkError};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// How long `success` / `error` stays visible before the form returns to idle.
pub const STATUS_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// What the contact form currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    /// `success` and `error` revert to `idle` on their own.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a submission is already being sent")]
    InFlight,

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("submission task ended unexpectedly: {0}")]
    Interrupted(String),
}

/// Status and field values, read together for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub status: SubmissionStatus,
    pub fields: ContactFields,
}

#[derive(Debug, Default)]
struct FormState {
    status: SubmissionStatus,
    fields: ContactFields,
    /// Bumped on every submission that reaches the sink; stale reset
    /// timers compare against it
    generation: u64,
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One mounted contact form.
///
/// Cloning shares the same form state.
#[derive(Clone)]
pub struct ContactForm {
    state: Arc<Mutex<FormState>>,
    sink: Arc<dyn LeadSink>,
    display_window: Duration,
    metrics: &'static SubmissionMetrics,
}

impl ContactForm {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            sink,
            display_window: STATUS_DISPLAY_WINDOW,
            metrics: SubmissionMetrics::global(),
        }
    }

    pub fn with_display_window(mut self, window: Duration) -> Self {
        self.display_window = window;
        self
    }

    /// Count outcomes in `metrics` instead of the process-wide counters.
    pub fn with_metrics(mut self, metrics: &'static SubmissionMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.state).status
    }

    pub fn fields(&self) -> ContactFields {
        lock(&self.state).fields.clone()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = lock(&self.state);
        FormSnapshot {
            status: state.status,
            fields: state.fields.clone(),
        }
    }

    /// Validate and send the form to the lead sink.
    ///
    /// Invalid input leaves the status untouched and never reaches the sink.
    /// Valid input moves the form to `sending` and issues exactly one insert;
    /// the form then shows `success` (fields cleared) or `error` (fields
    /// kept) for the display window before returning to `idle`.
    pub async fn submit(
        &self,
        fields: ContactFields,
        language: Language,
    ) -> Result<(), SubmissionError> {
        let metrics = self.metrics;

        let generation = {
            let mut state = lock(&self.state);

            if state.status == SubmissionStatus::Sending {
                metrics.record_duplicate();
                warn!("Ignoring contact submission while another one is sending");
                return Err(SubmissionError::InFlight);
            }

            if let Err(e) = fields.validate() {
                metrics.record_invalid();
                debug!("Contact form not sent: {}", e);
                state.fields = fields;
                return Err(e.into());
            }

            state.generation += 1;
            state.status = SubmissionStatus::Sending;
            state.fields = fields.clone();
            state.generation
        };

        let record = ContactSubmission::new(&fields, language);
        let form = self.clone();

        // Runs to completion even if the caller stops waiting
        let task = tokio::spawn(async move { form.deliver(generation, record).await });

        match task.await {
            Ok(result) => result,
            Err(e) => {
                error!("Contact submission task failed: {}", e);
                self.finish(generation, SubmissionStatus::Error);
                Err(SubmissionError::Interrupted(e.to_string()))
            }
        }
    }

    async fn deliver(
        &self,
        generation: u64,
        record: ContactSubmission,
    ) -> Result<(), SubmissionError> {
        let metrics = self.metrics;
        metrics.record_attempt();

        match self.sink.insert(&record).await {
            Ok(()) => {
                metrics.record_success();
                info!(
                    "Contact submission stored via {} sink (language: {})",
                    self.sink.name(),
                    record.language
                );
                self.finish(generation, SubmissionStatus::Success);
                Ok(())
            }
            Err(e) => {
                metrics.record_failure();
                error!("Error submitting contact form: {}", e);
                self.finish(generation, SubmissionStatus::Error);
                Err(e.into())
            }
        }
    }

    fn finish(&self, generation: u64, status: SubmissionStatus) {
        {
            let mut state = lock(&self.state);
            if state.generation != generation {
                return;
            }
            state.status = status;
            if status == SubmissionStatus::Success {
                state.fields = ContactFields::default();
            }
        }
        self.schedule_reset(generation);
    }

    fn schedule_reset(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let window = self.display_window;

        tokio::spawn(async move {
            tokio::time::sleep(window).await;

            let mut state = lock(&state);
            if state.generation == generation && state.status.is_terminal() {
                debug!("Contact form status '{}' cleared", state.status);
                state.status = SubmissionStatus::Idle;
            }
        });
    }
}
