//! Tracing setup: timestamped lines to both console and a log file.
//!
//! The console layer honors `RUST_LOG` via `EnvFilter` (defaulting to
//! `info`). The file layer appends to the configured log file through a
//! non-blocking writer; the returned guard must stay alive for the duration
//! of the process so buffered lines are flushed on shutdown.

use std::error::Error;
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Returns the worker guard that keeps the file writer alive. Dropping it
/// stops log lines from reaching the file.
pub fn init(log_file: &Path) -> Result<WorkerGuard, Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let dir = match log_file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = log_file
        .file_name()
        .unwrap_or_else(|| OsStr::new("scraper.log"));
    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(dir, file_name));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(file_writer)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
