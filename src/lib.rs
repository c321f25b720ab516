/*!
 * # subclean - SRT duplicate cleaner
 *
 * A Rust library for cleaning SubRip (SRT) subtitle files.
 *
 * ## Features
 *
 * - Split SRT documents into subtitle blocks
 * - Remove consecutive blocks that repeat the same text
 * - Renumber the remaining blocks from 1
 * - Clean a single file or every `.srt` file in a folder
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: Block model and document splitting
 * - `cleaner`: The cleanup pipeline:
 *   - `cleaner::dedup`: Adjacent duplicate removal
 *   - `cleaner::renumber`: Sequential renumbering
 *   - `cleaner::pipeline`: Stage orchestration and summary counters
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod cleaner;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use subtitle_processor::SubtitleBlock;
pub use cleaner::{CleanerPipeline, CleanReport};
pub use errors::AppError;
