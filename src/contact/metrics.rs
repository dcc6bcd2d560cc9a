//! Contact submission counters.
//!
//! Process-wide, lock-free counters of what happened to submitted forms.
//! The server logs a report at shutdown.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Submission counters.
#[derive(Debug, Default)]
pub struct SubmissionMetrics {
    /// Inserts issued to the lead sink
    attempts: AtomicUsize,

    /// Inserts the sink accepted
    successes: AtomicUsize,

    /// Inserts that failed (transport error or rejection)
    failures: AtomicUsize,

    /// Submits blocked by a missing or malformed field
    invalid: AtomicUsize,

    /// Submits refused because another one was still sending
    duplicates: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<SubmissionMetrics> = OnceLock::new();

impl SubmissionMetrics {
    /// Get the global submission metrics instance.
    pub fn global() -> &'static SubmissionMetrics {
        METRICS.get_or_init(SubmissionMetrics::default)
    }

    pub fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid(&self) {
        self.invalid.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicate(&self) {
        self.duplicates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn successes(&self) -> usize {
        self.successes.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn invalid(&self) -> usize {
        self.invalid.load(Ordering::Relaxed)
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let attempts = self.attempts();
        let successes = self.successes();
        let success_rate = if attempts > 0 {
            (successes as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            attempts,
            successes,
            failures: self.failures(),
            invalid: self.invalid(),
            duplicates: self.duplicates(),
            success_rate,
        }
    }
}

/// Snapshot of the submission counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub attempts: usize,
    pub successes: usize,
    pub failures: usize,
    pub invalid: usize,
    pub duplicates: usize,

    /// Accepted inserts as a percentage of attempts (0-100)
    pub success_rate: f64,
}
