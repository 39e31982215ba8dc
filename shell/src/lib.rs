//! A minimal interactive command shell.
//!
//! Each input line is either the built-in `exit` or the command line of an
//! external program. External programs are launched one at a time: the shell
//! waits for the child to terminate and releases every OS handle tied to it
//! before it reads the next line. A failed launch is reported with the OS error
//! code and its description, and the shell carries on.
//!
//! The OS side lives behind [`ProcessLauncher`]; [`NativeLauncher`] is the
//! implementation for the current platform. [`Executor`] holds the
//! launch-wait-release sequence and [`Interpreter`] the read loop around it.

mod argv;
pub mod command;
pub mod config;
pub mod error;
mod executor;
mod interpreter;
pub mod launcher;
mod platform;

#[cfg(test)]
mod fake;

pub use argv::split_command_line;
pub use command::{CommandLine, Directive, Flow};
pub use error::{LaunchError, ShellError};
pub use executor::Executor;
pub use interpreter::{Interpreter, classify};
pub use launcher::{LaunchOutcome, ProcessLauncher};
pub use platform::NativeLauncher;
