//! Localized string table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language tag → (string key → localized text)
///
/// Tags and keys are case-sensitive. Lookups never fail: a missing entry
/// falls back to the key itself so staff always receive something legible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedStringTable {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl LocalizedStringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one (lang, key) entry
    pub fn insert(&mut self, lang: impl Into<String>, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(lang.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Localized text, `None` when the language or key is missing
    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.entries
            .get(lang)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }

    /// Localized text with a caller-supplied fallback
    pub fn get_or<'a>(&'a self, lang: &str, key: &str, fallback: &'a str) -> &'a str {
        self.get(lang, key).unwrap_or(fallback)
    }

    /// Localized text falling back to the lookup key
    pub fn text<'a>(&'a self, lang: &str, key: &'a str) -> &'a str {
        self.get_or(lang, key, key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (lang, key) entries
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }
}
