/*!
 * Error types for the subclean application.
 *
 * The cleanup pipeline itself never fails; these errors belong to the
 * layer around it (configuration and input checks), defined with the
 * thiserror crate. I/O failures travel as `anyhow` errors with context.
 */

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input path that cannot be cleaned
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
