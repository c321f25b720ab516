/*!
 * Tests for the application controller
 */

use std::fs;
use std::time::Duration;
use anyhow::Result;
use subclean::app_config::Config;
use subclean::app_controller::Controller;
use subclean::errors::AppError;
use crate::common;

/// Test that an invalid configuration is rejected up front
#[test]
fn test_with_config_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.cleaned_suffix = "x/y".to_string();

    assert!(Controller::with_config(config).is_err());
}

/// Test that a missing input file is reported as invalid input
#[test]
fn test_clean_file_withMissingInput_shouldReturnInvalidInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let err = controller
        .clean_file(&temp_dir.path().join("missing.srt"), &temp_dir.path().join("out.srt"))
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::InvalidInput(_))));
    assert!(!temp_dir.path().join("out.srt").exists());
    Ok(())
}

/// Test that a directory is not accepted as a single input file
#[test]
fn test_clean_file_withDirectoryInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let err = controller
        .clean_file(temp_dir.path(), &temp_dir.path().join("out.srt"))
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::InvalidInput(msg)) if msg.contains("not a regular file")));
    assert!(!temp_dir.path().join("out.srt").exists());
    Ok(())
}

/// Test that a file without SRT extension or content is still cleaned
#[test]
fn test_clean_file_withNonSrtContent_shouldStillClean() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "notes.txt", "a\nb\nsame\n\nc\nd\nsame\n\ne\nf\nother")?;
    let output = temp_dir.path().join("notes.cleaned.txt");
    let controller = Controller::with_config(Config::default())?;

    let report = controller.clean_file(&input, &output)?;

    assert_eq!(fs::read_to_string(&output)?, "a\nb\nsame\n\ne\nf\nother");
    assert_eq!(report.duplicate_count, 1);
    assert_eq!(report.kept_count, 2);
    Ok(())
}

/// Test that a file detected as SRT by content alone is cleaned like an .srt file
#[test]
fn test_clean_file_withSrtContentInTxt_shouldRenumber() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "movie.txt")?;
    let output = temp_dir.path().join("movie.out.srt");
    let controller = Controller::with_config(Config::default())?;

    controller.clean_file(&input, &output)?;

    assert_eq!(fs::read_to_string(&output)?, common::DUPLICATED_SRT_CLEANED);
    Ok(())
}

/// Test that an existing output file is overwritten
#[test]
fn test_run_withExistingOutput_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;
    let output = common::create_test_file(temp_dir.path(), "subs_cleaned.srt", "stale")?;
    let controller = Controller::with_config(Config::default())?;

    let report = controller.run(input, output.clone())?;

    assert_eq!(fs::read_to_string(&output)?, common::DUPLICATED_SRT_CLEANED);
    assert_eq!(report.duplicate_count, 1);
    assert_eq!(report.original_count, 4);
    assert_eq!(report.kept_count, 3);
    Ok(())
}

/// Test duration formatting used in folder logs
#[test]
fn test_format_duration_withVariousDurations_shouldFormatCorrectly() {
    assert_eq!(Controller::format_duration(Duration::from_millis(2500)), "2.5s");
    assert_eq!(Controller::format_duration(Duration::from_secs(125)), "2m 5s");
    assert_eq!(Controller::format_duration(Duration::from_secs(3725)), "1h 2m 5s");
}
