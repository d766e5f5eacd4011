// src/core/stop_words.rs
use std::collections::{BTreeMap, HashSet};

use crate::error::{AnalysisError, Result};
use crate::models::Config;

pub mod loader;

pub type StopWordSet = HashSet<String>;

const ENGLISH: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "it", "they", "of", "to",
    "in", "on", "for", "with", "about", "as", "by",
];

const SPANISH: &[&str] = &[
    "un", "una", "el", "la", "y", "o", "pero", "es", "son", "fue", "fueron", "lo", "ellos", "de",
    "para", "en", "sobre", "con", "como", "por",
];

/// Stop-word lists keyed by language name.
///
/// Built once at startup and handed to the analysis; a run only ever reads it.
/// Language names are matched exactly, so "english" is not "English".
#[derive(Debug, Default, Clone)]
pub struct StopWordRegistry {
    languages: BTreeMap<String, StopWordSet>,
}

impl StopWordRegistry {
    /// An empty registry with no languages at all.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            languages: BTreeMap::new(),
        }
    }

    /// The built-in English and Spanish lists.
    #[inline]
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("English", ENGLISH.iter().copied());
        registry.register("Spanish", SPANISH.iter().copied());
        registry
    }

    /// Built-ins plus every language listed in `config`. A configured language
    /// with a built-in name replaces the built-in list.
    #[inline]
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::with_builtins();
        for (name, words) in &config.languages {
            registry.register(name, words);
        }
        registry
    }

    /// Adds or replaces a language. Words are stored lower-cased.
    #[inline]
    pub fn register<I, S>(&mut self, language: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self.languages.insert(language.to_owned(), set);
    }

    /// Looks up the stop words for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownLanguage`] if nothing is registered under that name.
    #[inline]
    pub fn lookup(&self, language: &str) -> Result<&StopWordSet> {
        self.languages
            .get(language)
            .ok_or_else(|| AnalysisError::UnknownLanguage {
                name: language.to_owned(),
            })
    }

    /// Lists the registered language names.
    ///
    /// # Returns
    ///
    /// * An iterator over the names in sorted order
    #[inline]
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}
