// src/core/scanner/normalizer.rs
use std::collections::BTreeMap;

use crate::core::scanner::counter::fold_letter;
use crate::models::{CollisionPolicy, LetterCounts, WordCounts};

fn fold_keys<K, F>(counts: &BTreeMap<K, u64>, policy: CollisionPolicy, fold: F) -> BTreeMap<K, u64>
where
    K: Ord,
    F: Fn(&K) -> K,
{
    let mut folded = BTreeMap::new();
    for (key, &count) in counts {
        folded
            .entry(fold(key))
            .and_modify(|existing: &mut u64| *existing = policy.merge(*existing, count))
            .or_insert(count);
    }
    folded
}

/// Returns a copy of `counts` with every word lower-cased.
///
/// Words that only differ by case collide; `policy` decides whether the later
/// entry (in key order) replaces the earlier one or the counts are summed.
#[inline]
#[must_use]
pub fn words_to_case_insensitive(counts: &WordCounts, policy: CollisionPolicy) -> WordCounts {
    fold_keys(counts, policy, |word| word.to_lowercase())
}

/// Letter counterpart of [`words_to_case_insensitive`].
#[inline]
#[must_use]
pub fn letters_to_case_insensitive(counts: &LetterCounts, policy: CollisionPolicy) -> LetterCounts {
    fold_keys(counts, policy, |&letter| fold_letter(letter))
}
