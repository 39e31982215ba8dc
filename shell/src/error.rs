//! Errors produced by the shell.

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Numeric OS error: `errno` on Unix, a Win32 error code on Windows.
pub type ErrorCode = u32;

/// Shown in place of the description when the OS cannot translate a code.
pub const GENERIC_ERROR_MESSAGE: &str = "unknown error";

/// The OS refused to create the child process.
///
/// Only ever reported to the user; the shell keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("launch failed (error {code}): {message}")]
pub struct LaunchError {
    pub code: ErrorCode,
    pub message: String,
}

impl LaunchError {
    /// Build an error from a code and a translated message.
    ///
    /// An empty translation counts as a failed one and is replaced with
    /// [`GENERIC_ERROR_MESSAGE`].
    pub fn new(code: ErrorCode, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim_end().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned());
        Self { code, message }
    }
}

/// Failures of the interactive front end. These end the read loop.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
