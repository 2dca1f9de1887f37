// src/log.rs
//
// Logging setup. The GUI writes to `.store/debug.log` (elapsed-time stamps,
// same file the app has always used); the CLI writes to stderr.
// Level comes from RUST_LOG, default `info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink {
    File,
    Stderr,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Calling twice is harmless; the second call
/// is ignored.
pub fn init(sink: LogSink) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_timer(Uptime::default())
        .with_target(false);

    let res = match sink {
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::File => {
            let _ = fs::create_dir_all(STORE_DIR);
            match OpenOptions::new().create(true).append(true).open(log_path()) {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                // No log file; fall back to stderr rather than go silent.
                Err(_) => builder.with_writer(std::io::stderr).try_init(),
            }
        }
    };
    let _ = res;
}
