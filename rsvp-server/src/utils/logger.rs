//! Logging Infrastructure
//!
//! `tracing-subscriber` with an `EnvFilter` (`RUST_LOG`), optionally writing
//! to a daily rolling file via `tracing-appender`.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "rsvp_server=info,tower_http=info";

/// Initialize the logger on stdout
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger.
///
/// `filter` overrides `RUST_LOG`; `json` switches to JSON lines; `log_dir`
/// (when it exists or can be created) sends output to `rsvp-server.YYYY-MM-DD`
/// files in that directory instead of stdout.
pub fn init_logger_with_file(filter: Option<&str>, json: bool, log_dir: Option<&str>) {
    let env_filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let appender = log_dir.and_then(|dir| {
        let path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(path) {
            eprintln!("Cannot create log directory {dir}: {e}, logging to stdout");
            return None;
        }
        Some(tracing_appender::rolling::daily(path, "rsvp-server"))
    });

    // try_init: a second call (tests, embedders) keeps the first subscriber
    let result = match (appender, json) {
        (Some(file), true) => builder.json().with_writer(file).with_ansi(false).try_init(),
        (Some(file), false) => builder.with_writer(file).with_ansi(false).try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {e}");
    }
}
