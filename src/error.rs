//! Error types for the drawer shell.
//!
//! Navigation itself never fails: unknown route ids degrade to an empty
//! label and no content. The variants here cover parsing route ids from
//! strings and the ambient setup around the terminal and logging.

use thiserror::Error;

/// Errors raised by the shell library.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A string did not name any registered route.
    #[error("unknown route id: {0:?}")]
    UnknownRoute(String),

    /// Terminal could not be switched into TUI mode.
    #[error("terminal initialization failed: {0}")]
    TerminalInit(#[from] std::io::Error),

    /// Log file or subscriber could not be installed.
    #[error("log setup failed: {message}")]
    LogSetup { message: String },
}

/// Result alias used across the crate.
pub type ShellResult<T> = Result<T, ShellError>;
