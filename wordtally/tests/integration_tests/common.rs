// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "mat.txt", "The cat sat on the mat.")?;

    create_test_file(
        temp_dir.path(),
        "stop_only.txt",
        "The and the, of a; by it.\nIs, was, WERE!",
    )?;

    create_test_file(
        temp_dir.path(),
        "spanish.txt",
        "El perro y la casa.\nEl gato es de la casa, pero el perro no.",
    )?;

    create_test_file(
        temp_dir.path(),
        "chapters/one.txt",
        "Call me Ishmael. Some years ago, never mind how long precisely.",
    )?;
    create_test_file(
        temp_dir.path(),
        "chapters/two.txt",
        "Whenever I find myself growing grim about the mouth.",
    )?;
    create_test_file(temp_dir.path(), "chapters/.draft.txt", "draft draft draft")?;

    create_test_file(temp_dir.path(), "empty.txt", "")?;

    Ok(temp_dir)
}

/// Parses the `- key: count` lines of one report section into pairs.
pub fn section_entries(report: &str, heading: &str) -> Vec<(String, u64)> {
    report
        .split_once(heading)
        .map(|(_, rest)| {
            rest.lines()
                .skip(1)
                .take_while(|line| line.starts_with("- "))
                .filter_map(|line| {
                    let (key, count) = line.strip_prefix("- ")?.rsplit_once(": ")?;
                    Some((key.to_owned(), count.parse().ok()?))
                })
                .collect()
        })
        .unwrap_or_default()
}
