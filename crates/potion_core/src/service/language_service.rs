//! Persisted language preference.

use crate::model::language::Language;
use crate::repo::kv_store::{KvStore, StoreResult, LANGUAGE_KEY};
use log::{info, warn};

/// Current display language, stored under the `language` key.
pub struct LanguagePreference<S: KvStore> {
    store: S,
    current: Language,
}

impl<S: KvStore> LanguagePreference<S> {
    /// Reads the stored language; missing or unknown values fall back to `en`.
    pub fn load(store: S) -> StoreResult<Self> {
        let current = match store.get(LANGUAGE_KEY)? {
            Some(raw) => Language::parse(&raw).unwrap_or_else(|| {
                warn!(
                    "event=language_load module=service status=fallback stored_len={}",
                    raw.len()
                );
                Language::default()
            }),
            None => Language::default(),
        };
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Sets and persists the language.
    ///
    /// The in-memory value changes even when the write fails.
    pub fn set(&mut self, language: Language) -> StoreResult<()> {
        self.current = language;
        info!(
            "event=language_set module=service status=ok language={}",
            language.as_str()
        );
        self.store.set(LANGUAGE_KEY, language.as_str())
    }

    /// Switches to the other language and returns it.
    pub fn toggle(&mut self) -> StoreResult<Language> {
        let next = self.current.toggle();
        self.set(next)?;
        Ok(next)
    }
}
