// src/core/scanner.rs
use crate::core::report::render;
use crate::core::stop_words::StopWordRegistry;
use crate::error::{AnalysisError, Result};
use crate::models::{AnalysisRequest, Tally};

pub mod counter;
pub mod filter;
pub mod normalizer;
#[cfg(test)]
pub mod test_utils;

use counter::process_file;
use filter::remove_stop_words;
use normalizer::{letters_to_case_insensitive, words_to_case_insensitive};

/// Counts words and letters across every file of the request, with stop words removed.
///
/// Nothing is read until the request has been validated: the path list must be
/// non-empty, the language must be registered, and every path must exist. The
/// first missing path, in submission order, aborts the whole request.
///
/// # Errors
///
/// This function may return an error if:
/// * The request has no paths ([`AnalysisError::EmptyInput`])
/// * The language has no stop-word list ([`AnalysisError::UnknownLanguage`])
/// * A path does not exist ([`AnalysisError::FileNotFound`])
/// * A file cannot be opened or read ([`AnalysisError::ReadError`])
#[inline]
pub fn analyze_counts(request: &AnalysisRequest, registry: &StopWordRegistry) -> Result<Tally> {
    if request.paths.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let stop_words = registry.lookup(&request.language)?;

    if let Some(missing) = request.paths.iter().find(|path| !path.exists()) {
        return Err(AnalysisError::FileNotFound {
            path: missing.clone(),
        });
    }

    let fold_case = !request.case_sensitive;
    let mut tally = Tally::new();

    for path in &request.paths {
        process_file(path, &mut tally.words, &mut tally.letters, fold_case)?;
    }

    if fold_case {
        tally.words = words_to_case_insensitive(&tally.words, request.collision_policy);
        tally.letters = letters_to_case_insensitive(&tally.letters, request.collision_policy);
    }

    let removed = remove_stop_words(&mut tally.words, stop_words);

    tracing::info!(
        files = request.paths.len(),
        language = %request.language,
        distinct_words = tally.words.len(),
        distinct_letters = tally.letters.len(),
        stop_words_removed = removed,
        "analysis complete"
    );

    Ok(tally)
}

/// Runs the whole pipeline and renders the text report.
///
/// # Errors
///
/// Fails under the same conditions as [`analyze_counts`]; no partial report is produced.
#[inline]
pub fn analyze(request: &AnalysisRequest, registry: &StopWordRegistry) -> Result<String> {
    analyze_counts(request, registry).map(|tally| render(&tally))
}
