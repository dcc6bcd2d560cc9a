//! Bundle shape validation.
//!
//! Every bundle must expose exactly the keys of the canonical bundle: a key
//! missing from one language is a defect, as is a list (`projects.items`,
//! `about.valueItems`) with a different length.

use crate::i18n::{Language, LanguageStrings};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Shape defects (missing keys, extra keys, list length mismatches)
    pub errors: Vec<String>,

    /// Non-critical findings (empty strings)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation bundle parity.
pub struct BundleValidator;

impl BundleValidator {
    /// Compare `candidate` against the `canonical` bundle.
    pub fn validate(canonical: &LanguageStrings, candidate: &LanguageStrings) -> ValidationReport {
        let mut report = ValidationReport::new();

        let canonical_entries = canonical.entries();
        let candidate_entries = candidate.entries();

        let canonical_keys: BTreeSet<&str> =
            canonical_entries.iter().map(|(key, _)| key.as_str()).collect();
        let candidate_keys: BTreeSet<&str> =
            candidate_entries.iter().map(|(key, _)| key.as_str()).collect();

        for key in canonical_keys.difference(&candidate_keys) {
            report.errors.push(format!("Missing key: {}", key));
        }
        for key in candidate_keys.difference(&canonical_keys) {
            report.errors.push(format!("Unexpected key: {}", key));
        }

        let lists = [
            (
                "projects.items",
                canonical.projects.items.len(),
                candidate.projects.items.len(),
            ),
            (
                "about.valueItems",
                canonical.about.value_items.len(),
                candidate.about.value_items.len(),
            ),
        ];
        for (name, expected, actual) in lists {
            if expected != actual {
                report.errors.push(format!(
                    "List length mismatch for {}: expected {}, found {}",
                    name, expected, actual
                ));
            }
        }

        for (key, value) in &candidate_entries {
            if value.trim().is_empty() {
                report.warnings.push(format!("Empty string: {}", key));
            }
        }

        report
    }

    /// Validate every enabled language against the canonical one.
    ///
    /// Findings are prefixed with the language code.
    pub fn validate_all() -> ValidationReport {
        let canonical = Language::canonical();
        let mut report = ValidationReport::new();

        for language in Language::all() {
            let mut found = Self::validate(canonical.strings(), language.strings());
            for msg in found.errors.iter_mut().chain(found.warnings.iter_mut()) {
                *msg = format!("[{}] {}", language.code(), msg);
            }
            report.merge(found);
        }

        report
    }
}
