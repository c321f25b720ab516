// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{error, warn, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use subclean::app_config::{self, Config};
use subclean::app_controller::Controller;
use subclean::file_utils::FileManager;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for subclean
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subclean - remove consecutive duplicate subtitles from SRT files
///
/// Drops subtitle blocks whose text repeats the previous one and renumbers
/// the rest sequentially.
#[derive(Parser, Debug)]
#[command(name = "subclean")]
#[command(version)]
#[command(about = "Remove consecutive duplicate subtitles from SRT files")]
#[command(long_about = "subclean removes subtitle blocks whose text repeats the block right before them, then renumbers the remaining blocks from 1.

EXAMPLES:
    subclean --input-file movie.srt                              # Writes subs_cleaned.srt
    subclean --input-file movie.srt --output-file movie.fixed.srt
    subclean --input-file /subtitles/                            # Cleans every .srt, writing <name>.cleaned.srt
    subclean --input-file movie.srt --report-malformed           # Warn about skipped blocks
    subclean completions bash > subclean.bash                    # Generate bash completions

CONFIGURATION:
    Settings can be read from a JSON file given with --config. If that file
    doesn't exist, a default one will be created there. Command line flags
    take precedence over the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The path to the input SRT file, or a directory of SRT files
    #[arg(short, long, value_name = "INPUT_PATH")]
    input_file: Option<PathBuf>,

    /// The path where the cleaned SRT file will be saved [default: subs_cleaned.srt]
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Log a warning for every malformed block that is skipped
    #[arg(long)]
    report_malformed: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and prefix for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌ "),
            Level::Warn => ("\x1B[1;33m", "🚧 "),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍 "),
            Level::Trace => ("\x1B[1;35m", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, prefix) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, prefix, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() {
    // The logger accepts everything; the max level is narrowed once options are known
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: CommandLineOptions) -> Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "subclean", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it before loading config
    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let input_path = cli.input_file.clone().ok_or_else(|| {
        anyhow!("--input-file is required when no subcommand is specified")
    })?;

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());
    debug!("Using configuration: {:?}", config);

    let controller = Controller::with_config(config)?;

    if FileManager::dir_exists(&input_path) {
        if cli.output_file.is_some() {
            warn!("--output-file is ignored when cleaning a folder");
        }
        controller.run_folder(input_path)?;
    } else {
        let output_file = cli.output_file
            .unwrap_or_else(|| PathBuf::from(&controller.config().output_file));
        controller.run(input_path, output_file)?;
    }

    Ok(())
}

/// Load the config file if one was given, then apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_or_create(path)?,
        None => Config::default(),
    };

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if cli.report_malformed {
        config.report_malformed = true;
    }

    Ok(config)
}
