//! Internationalization (i18n) for the site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Type-safe `Language` that can only hold a registered code
//! - `strings`: The English, French and Arabic text bundles
//! - `store`: Per-visitor active language with change notification
//! - `validator`: Structural checks of every bundle against English
//!
//! # Example
//!
//! ```rust,ignore
//! use novaytek_site::i18n::{Language, LocalizationStore};
//!
//! let store = LocalizationStore::new();
//! store.set_language(Language::from_code("ar")?);
//! assert!(store.is_rtl());
//! ```

mod language;
mod registry;
pub(crate) mod strings;
mod store;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
pub use strings::{
    AboutStrings, ContactFormStrings, ContactInfoStrings, ContactStrings, FooterStrings,
    HeroStrings, LanguageStrings, NavStrings, ProjectItem, ProjectsStrings, StatsStrings,
    ValueItem,
};
pub use store::{LocaleSnapshot, LocalizationStore};
pub use validator::{BundleValidator, ValidationReport};
