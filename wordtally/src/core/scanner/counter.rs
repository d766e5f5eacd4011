// src/core/scanner/counter.rs
use regex::Regex;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead as _, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{AnalysisError, Result};
use crate::models::{LetterCounts, WordCounts};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

// General category L only: letter numbers, circled letters and vowel signs are alphabetic but not letters.
static LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}").expect("valid letter pattern"));

/// Lower-cases a single letter, keeping it a single `char`.
///
/// Letters whose lower case expands to several chars keep the first one.
#[inline]
#[must_use]
pub fn fold_letter(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// Adds the words and letters of one line to the running counts.
#[inline]
pub fn count_line(
    line: &str,
    word_counts: &mut WordCounts,
    letter_counts: &mut LetterCounts,
    fold_case: bool,
) {
    for token in WORD.find_iter(line).map(|m| m.as_str()) {
        let word = if fold_case {
            token.to_lowercase()
        } else {
            token.to_owned()
        };
        let count = word_counts.entry(word).or_insert(0);
        *count = count.saturating_add(1);
    }

    for letter in LETTER.find_iter(line).flat_map(|m| m.as_str().chars()) {
        let letter = if fold_case { fold_letter(letter) } else { letter };
        let count = letter_counts.entry(letter).or_insert(0);
        *count = count.saturating_add(1);
    }
}

/// Reads `path` line by line and adds its words and letters to the running counts.
///
/// Counts are never reset, so calling this for several files accumulates a
/// batch total. Invalid UTF-8 is decoded lossily instead of failing the file.
///
/// # Errors
///
/// Returns [`AnalysisError::ReadError`] if the file cannot be opened or a read fails.
/// Counts from lines read before the failure stay in the maps.
#[inline]
pub fn process_file(
    path: &Path,
    word_counts: &mut WordCounts,
    letter_counts: &mut LetterCounts,
    fold_case: bool,
) -> Result<()> {
    let read_error = |source| AnalysisError::ReadError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let reader = BufReader::new(file);

    let mut lines: u64 = 0;
    for raw in reader.split(b'\n') {
        let raw = raw.map_err(read_error)?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw);
        let line: Cow<'_, str> = String::from_utf8_lossy(bytes);
        count_line(&line, word_counts, letter_counts, fold_case);
        lines = lines.saturating_add(1);
    }

    tracing::debug!(path = %path.display(), lines, "processed file");
    Ok(())
}
