use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(
        &dir,
        "first.txt",
        "The quick brown fox\njumps over the lazy dog.",
    )?;
    create_test_file(&dir, "second.txt", "Fox and fox!")?;
    create_test_file(&dir, "nested/third.txt", "Nested words here")?;
    create_test_file(&dir, ".hidden.txt", "Hidden file")?;

    Ok(dir)
}
