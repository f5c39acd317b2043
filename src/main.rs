//! # SWIFT - Streamlined Workflow, Increased Focus Typography
//!
//! A small modal text editor for the terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the editor on the welcome screen
//! cargo run
//!
//! # Run with a file
//! cargo run -- path/to/file.go
//! cargo run -- -f path/to/file.go
//!
//! # Verbose logging (written to <data dir>/swift/logs/swift.log)
//! cargo run -- -vv notes.txt
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use swift_core::Config;
use swift_tui::{Flags, run};

/// SWIFT - a modal text editor for the terminal
#[derive(Parser, Debug)]
#[command(name = "swift")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// File to open (takes precedence over FILE)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file_flag: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// The file to open at startup, if any.
    fn path(&self) -> Option<PathBuf> {
        self.file_flag.clone().or_else(|| self.file.clone())
    }
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Logs go to a file: stdout belongs to the editor.
fn init_logging(verbose: u8) -> Option<WorkerGuard> {
    let log_dir = dirs::data_dir()
        .map(|dir| dir.join("swift").join("logs"))
        .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        .and_then(|dir| std::fs::create_dir_all(&dir).map(|()| dir))
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("swift").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "swift.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose).to_string()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false)
                .with_level(true),
        )
        .try_init()
        .ok()?;

    tracing::debug!(log_dir = %log_dir.display(), "tracing initialized");
    Some(guard)
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(args.verbose);

    tracing::info!("Starting SWIFT v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::resolve(args.config.as_deref()).context("failed to load configuration")?;

    let flags = Flags {
        file: args.path(),
        config,
    };

    run(flags).context("editor error")?;

    Ok(())
}
