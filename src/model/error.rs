//! Error types for contentscroll.
//!
//! The scroll core has no failure modes: out-of-range requests are clamped
//! or dropped, never signalled. Errors only exist at the impure boundary
//! (configuration, logging, fixture input, terminal I/O), and each boundary
//! gets its own `thiserror` enum that converts into [`AppError`] via `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing subscriber setup
//!   - [`InputError`] - fixture file failures
//!   - `std::io::Error` - terminal failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use contentscroll::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _records = read_fixture()?;
///     Ok(())
/// }
/// # fn read_fixture() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Fixture input could not be loaded.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the viewport cannot be shown.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The event loop stopped with an error.
    #[error("TUI error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when loading fixture records from a file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The fixture file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use contentscroll::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The file exists but is not a page envelope (or a list of them).
    #[error("Invalid fixture JSON in {path}: {source}")]
    Json {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser error with line/column information.
        #[source]
        source: serde_json::Error,
    },

    /// Generic I/O error reading the fixture file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_app_error() {
        let err: AppError = InputError::FileNotFound {
            path: PathBuf::from("pages.json"),
        }
        .into();
        assert!(matches!(err, AppError::Input(_)));
        assert!(err.to_string().contains("pages.json"));
    }

    #[test]
    fn io_error_converts_into_terminal_variant() {
        let err: AppError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, AppError::Terminal(_)));
    }

    #[test]
    fn json_error_mentions_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = InputError::Json {
            path: PathBuf::from("/data/page.json"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/page.json"), "got: {msg}");
    }
}
