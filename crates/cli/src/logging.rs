//! Log output for `dmemo`: always stderr, plus a log file when configured.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use daymemo_core::config::types::LoggingConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Flushes the file writer when the process exits.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub fn init(logging: &LoggingConfig) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter(level_or(&logging.level, LevelFilter::INFO)));

    let file_layer = logging.file.as_deref().map(|path| {
        let level = logging.file_level.as_deref().unwrap_or(&logging.level);
        fmt::layer()
            .with_writer(open_log_file(path))
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(filter(level_or(level, LevelFilter::DEBUG)))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

/// `RUST_LOG` directives win over the configured level.
fn filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

/// Configured level name (`warn`, `DEBUG`, `off`, ...), or `fallback` when unrecognised.
fn level_or(name: &str, fallback: LevelFilter) -> LevelFilter {
    let name = name.trim();
    if name.is_empty() { fallback } else { name.parse().unwrap_or(fallback) }
}

fn open_log_file(path: &Path) -> NonBlocking {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap_or_else(|e| fail(path, &e));
    }
    let file = File::create(path).unwrap_or_else(|e| fail(path, &e));

    let (writer, guard) = tracing_appender::non_blocking(file);
    FILE_GUARD.get_or_init(|| guard);
    writer
}

fn fail(path: &Path, e: &io::Error) -> ! {
    eprintln!("Failed to create log file {}: {e}", path.display());
    std::process::exit(1);
}
