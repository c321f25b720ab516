/*!
 * Common test utilities for the subclean test suite
 */

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample subtitle with one adjacent duplicate and a gap in numbering
pub const DUPLICATED_SRT: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:04,000 --> 00:00:05,000
This is a test subtitle.

3
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

5
00:00:10,000 --> 00:00:14,000
For testing purposes.
";

/// Expected cleanup of `DUPLICATED_SRT`
pub const DUPLICATED_SRT_CLEANED: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.";

/// Creates a sample subtitle file containing a duplicate
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, DUPLICATED_SRT)
}

/// Builds an SRT document from (index, text) pairs with generated timings
pub fn build_srt(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, (index, text))| {
            format!("{}\n00:00:{:02},000 --> 00:00:{:02},500\n{}", index, i, i, text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
