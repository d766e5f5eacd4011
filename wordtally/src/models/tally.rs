// src/models/tally.rs
use std::collections::BTreeMap;

pub type WordCounts = BTreeMap<String, u64>;
pub type LetterCounts = BTreeMap<char, u64>;

/// Word and letter counts accumulated over one batch of files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub words: WordCounts,
    pub letters: LetterCounts,
}

impl Tally {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: BTreeMap::new(),
            letters: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn total_words(&self) -> u64 {
        self.words.values().copied().fold(0, u64::saturating_add)
    }

    #[inline]
    #[must_use]
    pub fn total_letters(&self) -> u64 {
        self.letters.values().copied().fold(0, u64::saturating_add)
    }
}
