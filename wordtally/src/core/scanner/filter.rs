// src/core/scanner/filter.rs
use crate::core::stop_words::StopWordSet;
use crate::models::WordCounts;

/// Drops every word whose lower-case form is a stop word. Returns how many
/// distinct words were removed.
#[inline]
pub fn remove_stop_words(word_counts: &mut WordCounts, stop_words: &StopWordSet) -> usize {
    let before = word_counts.len();
    word_counts.retain(|word, _| !stop_words.contains(&word.to_lowercase()));
    before.saturating_sub(word_counts.len())
}
