// tests/integration_tests/error_handling_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use std::path::PathBuf;
use wordtally::{AnalysisError, AnalysisRequest, StopWordRegistry, analyze};

#[test]
fn test_empty_input() {
    let registry = StopWordRegistry::with_builtins();
    let request = AnalysisRequest::new(Vec::<PathBuf>::new(), "English", false);

    let err = analyze(&request, &registry).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput));
    assert_eq!(err.to_string(), "No input files were supplied");
}

#[test]
fn test_missing_file_listed_first() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let registry = StopWordRegistry::with_builtins();
    let missing = temp_dir.path().join("does_not_exist.txt");
    let request = AnalysisRequest::new(
        [missing.clone(), temp_dir.path().join("mat.txt")],
        "English",
        false,
    );

    let err = analyze(&request, &registry).unwrap_err();
    assert!(
        matches!(err, AnalysisError::FileNotFound { ref path } if *path == missing),
        "Expected FileNotFound for the missing path, got: {err}"
    );
    assert!(err.to_string().contains("does_not_exist.txt"));
    Ok(())
}

#[test]
fn test_missing_file_listed_last_still_aborts() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let registry = StopWordRegistry::with_builtins();
    let missing = temp_dir.path().join("late.txt");
    let request = AnalysisRequest::new(
        [temp_dir.path().join("mat.txt"), missing.clone()],
        "English",
        false,
    );

    assert!(matches!(
        analyze(&request, &registry),
        Err(AnalysisError::FileNotFound { ref path }) if *path == missing
    ));
    Ok(())
}

#[test]
fn test_unknown_language_names_the_language() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let registry = StopWordRegistry::with_builtins();
    let request = AnalysisRequest::new([temp_dir.path().join("mat.txt")], "Elvish", false);

    let err = analyze(&request, &registry).unwrap_err();
    assert!(matches!(err, AnalysisError::UnknownLanguage { .. }));
    assert_eq!(err.to_string(), "Unknown language: Elvish");
    Ok(())
}

#[test]
fn test_unreadable_path_is_a_read_error() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let registry = StopWordRegistry::with_builtins();
    let directory = temp_dir.path().join("chapters");
    let request = AnalysisRequest::new(
        [temp_dir.path().join("mat.txt"), directory.clone()],
        "English",
        false,
    );

    let err = analyze(&request, &registry).unwrap_err();
    assert!(
        matches!(err, AnalysisError::ReadError { ref path, .. } if *path == directory),
        "Expected ReadError for the directory, got: {err}"
    );
    assert!(std::error::Error::source(&err).is_some());
    Ok(())
}
