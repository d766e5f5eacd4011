// src/utils.rs
use std::path::PathBuf;

/// Splits a newline-delimited list of paths, trimming each line and skipping blank ones.
#[inline]
#[must_use]
pub fn parse_path_list(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Checks whether a walked entry is a dotfile or dot-directory.
///
/// # Arguments
///
/// * `entry` - The directory entry to check
///
/// # Returns
///
/// * `true` if the entry's name starts with `.` and it is not the walk root
#[inline]
#[must_use]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    // The walk root is whatever the user named, even "." or ".notes".
    if entry.depth() == 0 {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Checks whether an input contains glob wildcard characters.
///
/// # Arguments
///
/// * `input` - A command-line input
///
/// # Returns
///
/// * `true` if the input contains `*`, `?` or `[`
#[inline]
#[must_use]
pub fn has_glob_meta(input: &str) -> bool {
    input.contains(['*', '?', '['])
}
