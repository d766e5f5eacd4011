// src/inputs.rs
use anyhow::{Context as _, Result};
use glob::MatchOptions;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::{has_glob_meta, is_hidden};

/// Lists the non-hidden files under `dir`, sorted by name at every level.
///
/// # Errors
///
/// This function may return an error if the directory or one of its
/// subdirectories cannot be read.
#[inline]
pub fn walk_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn push_path(path: PathBuf, paths: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_dir() {
        paths.extend(walk_directory(&path)?);
    } else {
        paths.push(path);
    }
    Ok(())
}

/// Turns command-line inputs into the ordered list of files to analyze.
///
/// Directories are expanded to the files beneath them and glob patterns to
/// their matches. An input naming an existing path is taken literally even if
/// it contains glob characters. Anything else, including a pattern that
/// matches nothing, is kept as given so that a missing file is reported by the
/// analysis.
///
/// # Arguments
///
/// * `inputs` - Paths, directories and glob patterns, in the order given
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` with every file to analyze, in input order
///
/// # Errors
///
/// This function may return an error if:
/// * A glob pattern is malformed
/// * A matched path or a directory cannot be read
#[inline]
pub fn collect_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        let input: &str = input.as_ref();
        // An existing path wins over reading its brackets or stars as a pattern.
        if !has_glob_meta(input) || Path::new(input).exists() {
            push_path(PathBuf::from(input), &mut paths)?;
            continue;
        }

        let mut matched = false;
        // Wildcards never match hidden names, as with directory walks.
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        for entry in glob::glob_with(input, options)
            .with_context(|| format!("Invalid glob pattern: {input}"))?
        {
            let path = entry.with_context(|| format!("Failed to read match of: {input}"))?;
            matched = true;
            push_path(path, &mut paths)?;
        }

        if !matched {
            tracing::warn!(pattern = input, "glob pattern matched no files");
            paths.push(PathBuf::from(input));
        }
    }

    Ok(paths)
}
