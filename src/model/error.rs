//! Error types for colbar.
//!
//! - [`ContextError`] - a consumer needed a provider (the open popover panel)
//!   that is not there. Programming error: propagated and fatal, never
//!   recovered.
//! - [`CatalogueError`] - a menu file could not be read or parsed.
//!
//! Incomplete measurement and degenerate budgets are not errors; the layout
//! controller treats them as the transient `Unmeasured` state.

use std::path::PathBuf;
use thiserror::Error;

/// A context-dependent operation was invoked outside its provider scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The required provider is not active.
    #[error("{consumer} must be used within an open {provider}")]
    MissingProvider {
        /// What asked for the provider.
        consumer: &'static str,
        /// The provider that was missing.
        provider: &'static str,
    },
}

/// Errors loading a menu catalogue file.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The file could not be read.
    #[error("Failed to read menu file at {path:?}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of menu items.
    #[error("Invalid menu file {path:?}: {source}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
