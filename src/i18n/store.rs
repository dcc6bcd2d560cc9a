//! Localization store: the active language of one visitor.
//!
//! The store is passed explicitly to whatever renders or submits on behalf
//! of that visitor. Views that need to react to a language switch hold a
//! receiver from [`LocalizationStore::subscribe`].

use crate::i18n::{Language, LanguageStrings, TextDirection};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Everything a view needs for one render, read atomically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocaleSnapshot {
    pub language: Language,
    pub strings: &'static LanguageStrings,
    pub direction: TextDirection,
}

impl From<Language> for LocaleSnapshot {
    fn from(language: Language) -> Self {
        Self {
            language,
            strings: language.strings(),
            direction: language.direction(),
        }
    }
}

/// Active language plus change notification.
///
/// Cloning the store shares the same underlying state.
#[derive(Debug, Clone)]
pub struct LocalizationStore {
    tx: Arc<watch::Sender<Language>>,
}

impl LocalizationStore {
    /// New store starting in the canonical language (English).
    pub fn new() -> Self {
        Self::with_language(Language::canonical())
    }

    pub fn with_language(language: Language) -> Self {
        let (tx, _rx) = watch::channel(language);
        Self { tx: Arc::new(tx) }
    }

    pub fn language(&self) -> Language {
        *self.tx.borrow()
    }

    /// Switch the active language.
    ///
    /// Subscribers are notified only when the language actually changes.
    pub fn set_language(&self, language: Language) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == language {
                false
            } else {
                *current = language;
                true
            }
        });

        if changed {
            debug!(
                "Language switched to {} ({})",
                language.code(),
                language.direction()
            );
        }
    }

    /// Bundle of the active language.
    pub fn translations(&self) -> &'static LanguageStrings {
        self.language().strings()
    }

    pub fn is_rtl(&self) -> bool {
        self.language() == Language::ARABIC
    }

    pub fn direction(&self) -> TextDirection {
        self.language().direction()
    }

    /// Receiver that observes every subsequent language change.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.tx.subscribe()
    }

    /// Language, bundle and direction from a single read.
    pub fn snapshot(&self) -> LocaleSnapshot {
        LocaleSnapshot::from(self.language())
    }
}

impl Default for LocalizationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_initial_language_is_english() {
        let store = LocalizationStore::new();
        assert_eq!(store.language(), Language::ENGLISH);
        assert_eq!(store.translations().nav.home, "Home");
        assert!(!store.is_rtl());
    }

    #[test]
    fn test_set_language_resolves_bundle() {
        let store = LocalizationStore::new();
        store.set_language(Language::FRENCH);

        assert_eq!(store.language(), Language::FRENCH);
        assert_eq!(store.translations().contact.form.submit, "Envoyer le Message");
    }

    #[test]
    fn test_rtl_only_for_arabic() {
        let store = LocalizationStore::new();

        store.set_language(Language::ARABIC);
        assert!(store.is_rtl());
        assert_eq!(store.direction(), TextDirection::Rtl);

        store.set_language(Language::FRENCH);
        assert!(!store.is_rtl());

        store.set_language(Language::ENGLISH);
        assert!(!store.is_rtl());
        assert_eq!(store.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_clones_share_state() {
        let store = LocalizationStore::new();
        let other = store.clone();

        other.set_language(Language::ARABIC);
        assert_eq!(store.language(), Language::ARABIC);
    }

    #[test]
    fn test_subscriber_sees_change() {
        let store = LocalizationStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set_language(Language::ARABIC);

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::ARABIC);
    }

    #[test]
    fn test_same_language_does_not_notify() {
        let store = LocalizationStore::new();
        let mut rx = store.subscribe();

        store.set_language(Language::ENGLISH);

        assert!(!rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::ENGLISH);
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_change() {
        let store = LocalizationStore::new();
        let mut rx = store.subscribe();

        let setter = store.clone();
        tokio::spawn(async move {
            setter.set_language(Language::FRENCH);
        });

        tokio::time::timeout(Duration::from_secs(1), rx.changed())
            .await
            .expect("Should be notified")
            .expect("Sender alive");
        assert_eq!(*rx.borrow(), Language::FRENCH);
    }

    #[test]
    fn test_snapshot_is_consistent() {
        let store = LocalizationStore::with_language(Language::ARABIC);
        let snapshot = store.snapshot();

        assert_eq!(snapshot.language, Language::ARABIC);
        assert_eq!(snapshot.direction, TextDirection::Rtl);
        assert_eq!(snapshot.strings.nav.home, "الرئيسية");
    }
}
