//! # Localized Content
//!
//! Every human-readable field in the content model is stored as a
//! primary-language value plus an optional secondary-language override.
//! [`Localized`] wraps such a pair so the fallback rule lives in one place
//! instead of being repeated at every call site.
//!
//! Resolution never fails: a missing or empty secondary value always falls
//! back to the primary value.

use serde::{Deserialize, Serialize};

/// The language a caller wants content resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// The language content is authored in.
    Primary,
    /// The optional translation language.
    Secondary,
}

/// A value stored in the primary language with an optional secondary-language
/// override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub primary: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<T>,
}

impl<T> Localized<T> {
    /// Create a value with no translation.
    pub fn new(primary: T) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Create a value with both language variants.
    pub fn with_secondary(primary: T, secondary: T) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }
}

impl<T: Default> Default for Localized<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl Localized<String> {
    /// Resolve the string for the active language.
    ///
    /// The secondary value wins only when the active language is
    /// [`Language::Secondary`] and the value is present and non-empty;
    /// everything else falls back to the primary value.
    pub fn resolve(&self, lang: Language) -> &str {
        match (lang, &self.secondary) {
            (Language::Secondary, Some(s)) if !s.is_empty() => s,
            _ => &self.primary,
        }
    }
}

impl Localized<Vec<String>> {
    /// Resolve the whole array for the active language.
    ///
    /// Arrays are replaced wholesale: a present secondary array fully
    /// replaces the primary one when the active language is secondary, even
    /// if it is shorter. There is no per-index fallback.
    pub fn resolve(&self, lang: Language) -> &[String] {
        match (lang, &self.secondary) {
            (Language::Secondary, Some(s)) => s,
            _ => &self.primary,
        }
    }

    /// Resolve a single item, with out-of-range indices yielding `""`.
    pub fn item(&self, index: usize, lang: Language) -> &str {
        self.resolve(lang)
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl From<&str> for Localized<String> {
    fn from(primary: &str) -> Self {
        Self::new(primary.to_string())
    }
}

impl From<String> for Localized<String> {
    fn from(primary: String) -> Self {
        Self::new(primary)
    }
}
