// src/core/report.rs
use std::collections::BTreeMap;
use std::fmt::{Display, Write as _};

use crate::models::Tally;

pub const NO_CONTENT_MESSAGE: &str =
    "No words or letters found after processing the files (or they were all stop words).";

/// Entries sorted by descending count. The sort is stable, so equal counts
/// keep key order.
#[inline]
#[must_use]
pub fn sorted_by_count<K>(counts: &BTreeMap<K, u64>) -> Vec<(&K, u64)> {
    let mut entries: Vec<(&K, u64)> = counts.iter().map(|(key, &count)| (key, count)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

fn write_section<K: Display>(output: &mut String, counts: &BTreeMap<K, u64>) {
    for (key, count) in sorted_by_count(counts) {
        // Writing to a String cannot fail.
        let _ = writeln!(output, "- {key}: {count}");
    }
}

/// Renders the word and letter sections with their totals.
#[inline]
#[must_use]
pub fn render(tally: &Tally) -> String {
    if tally.is_empty() {
        return NO_CONTENT_MESSAGE.to_owned();
    }

    let mut output = String::from("Word Counts:\n");
    write_section(&mut output, &tally.words);
    let _ = write!(
        output,
        "\nTotal Words (excluding stop words): {}",
        tally.total_words()
    );

    output.push_str("\n\nLetter Counts:\n");
    write_section(&mut output, &tally.letters);
    let _ = write!(output, "\nTotal Letters: {}", tally.total_letters());

    output
}
