//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code present and enabled in the
//! [`LanguageRegistry`], so holding one means the site has a bundle for it.

use crate::i18n::{strings, LanguageConfig, LanguageRegistry, LanguageStrings, TextDirection};
use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fr", "ar")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const FRENCH: Language = Language { code: "fr" };

    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    ///
    /// # Example
    /// ```ignore
    /// let french = Language::from_code("fr")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language new visitors start in (English).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All enabled languages, in selector order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Short selector label (e.g., "AR").
    pub fn label(&self) -> &'static str {
        self.config().label
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    /// `true` only for Arabic.
    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// The translation bundle for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        strings::for_code(self.code)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl TryFrom<String> for Language {
    type Error = anyhow::Error;

    fn try_from(code: String) -> Result<Self> {
        Language::from_code(&code)
    }
}

// Deserialized through an owned `String` so any input lifetime works
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Language::try_from(code).map_err(serde::de::Error::custom)
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code
    }
}
