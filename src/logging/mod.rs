//! File logging for colbar.
//!
//! The bar and popover own the terminal, so events go to a plain-text file
//! (`tail -f` it from another terminal). What gets logged:
//! - `info`: resolved configuration, popover open/close, loaded menu files.
//! - `warn`: rejected environment overrides, truncated menu catalogues,
//!   packing withheld for lack of a positive height budget, stale item
//!   measurements.
//! - `debug`: layout invalidations with their reason, pack results as
//!   `[[0, 1], [2]]`, geometry changes, key actions and clicks.
//!
//! `RUST_LOG=colbar=debug` shows the layout state machine at work.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Why the log file subscriber could not be installed.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The path names no file (e.g. `/` or a path ending in `..`).
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber is already installed.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into the directory to write in and the file name.
///
/// A bare file name resolves to the current directory.
///
/// # Errors
///
/// `LoggingError::InvalidPath` when the path has no UTF-8 file name.
pub fn log_target(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path.parent().unwrap_or_else(|| Path::new(""));
    Ok((directory, file_name))
}

/// Install the global subscriber writing to `log_path`.
///
/// Creates the log directory when missing. The filter comes from `RUST_LOG`,
/// falling back to [`DEFAULT_FILTER`]. Call it once, before anything worth
/// logging happens; events emitted earlier are dropped.
///
/// # Errors
///
/// Fails if the path names no file, the directory cannot be created, or a
/// subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = log_target(log_path)?;
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
