use anyhow::{Result, Context, anyhow};
use log::{error, warn, info, debug};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::cleaner::{CleanerPipeline, CleanReport};
use crate::errors::AppError;
use crate::file_utils::{FileManager, FileType};

// @module: Application controller for subtitle cleanup

// @const: Run log written into processed folders
const FOLDER_LOG_FILE: &str = "subclean.log";

/// Totals for a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub duplicates_removed: usize,
}

/// Main application controller: file access and reporting around the pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clean one SRT file, write the result and log the summary
    pub fn run(&self, input_file: PathBuf, output_file: PathBuf) -> Result<CleanReport> {
        let report = self.clean_file(&input_file, &output_file)?;

        info!("Cleaned subtitles saved to: '{}'", output_file.display());
        info!("Removed duplicates: {}", report.duplicate_count);
        info!("In the original file, there were {} subs.", report.original_count);
        info!("In the cleaned up file, there are {} subs.", report.kept_count);

        Ok(report)
    }

    /// Clean every `.srt` file under a directory, writing `<stem>.<suffix>.srt` beside each
    pub fn run_folder(&self, input_dir: PathBuf) -> Result<FolderSummary> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(AppError::InvalidInput(format!(
                "Input directory does not exist: {}",
                input_dir.display()
            ))
            .into());
        }

        let suffix = &self.config.cleaned_suffix;
        let subtitle_files = FileManager::find_files(&input_dir, "srt");

        if subtitle_files.is_empty() {
            return Err(anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(subtitle_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Cleaning files");

        let mut summary = FolderSummary::default();

        for subtitle_file in subtitle_files.iter() {
            let file_name = subtitle_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            if FileManager::is_cleaned_output(subtitle_file, suffix) {
                debug!("Skipping already cleaned file: {}", file_name);
                summary.skipped += 1;
                folder_pb.inc(1);
                continue;
            }

            folder_pb.set_message(format!("Cleaning: {}", file_name));

            let output_file = FileManager::generate_output_path(subtitle_file, suffix);
            match self.clean_file(subtitle_file, &output_file) {
                Ok(report) => {
                    debug!("{}: {} of {} subs kept, {} duplicates removed",
                        file_name, report.kept_count, report.original_count, report.duplicate_count);
                    summary.processed += 1;
                    summary.duplicates_removed += report.duplicate_count;
                },
                Err(e) => {
                    folder_pb.suspend(|| error!("Error cleaning file {}: {}", file_name, e));
                    summary.errors += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder cleanup complete");

        let summary_message = format!(
            "Folder cleanup completed: {} processed, {} skipped, {} errors, {} duplicates removed",
            summary.processed, summary.skipped, summary.errors, summary.duplicates_removed
        );
        info!("{}", summary_message);

        let log_file_path = input_dir.join(FOLDER_LOG_FILE);
        let log_entry = format!("{} ({}) - Duration: {}",
            summary_message,
            input_dir.display(),
            Self::format_duration(start_time.elapsed()));

        if let Err(e) = FileManager::append_to_log_file(&log_file_path, &log_entry) {
            warn!("Failed to write folder log: {}", e);
        } else {
            debug!("Folder log written to {}", log_file_path.display());
        }

        Ok(summary)
    }

    /// Read, clean and write one file without the user-facing summary
    pub fn clean_file(&self, input_file: &Path, output_file: &Path) -> Result<CleanReport> {
        let metadata = match fs::metadata(input_file) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::InvalidInput(format!(
                    "Input file does not exist: {}",
                    input_file.display()
                ))
                .into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to inspect input file: {}", input_file.display()));
            }
        };

        if !metadata.is_file() {
            return Err(AppError::InvalidInput(format!(
                "Input path is not a regular file: {}",
                input_file.display()
            ))
            .into());
        }

        let content = FileManager::read_subtitle_file(input_file)?;

        if FileManager::detect_file_type(input_file, &content) != FileType::Subtitle {
            warn!("File does not look like an SRT subtitle, cleaning anyway: {}", input_file.display());
        }

        let report = CleanerPipeline::clean(&content);

        for malformed in &report.malformed {
            if self.config.report_malformed {
                warn!("Skipped malformed block #{} starting with '{}'", malformed.position, malformed.first_line);
            } else {
                debug!("Skipped malformed block #{} starting with '{}'", malformed.position, malformed.first_line);
            }
        }

        FileManager::write_to_file(output_file, &report.output)?;

        Ok(report)
    }

    /// Format a duration as `1h 2m 3s`, `2m 3s` or `3.4s`
    pub fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
