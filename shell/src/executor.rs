use crate::command::CommandLine;
use crate::error::LaunchError;
use crate::launcher::{ChildGuard, LaunchOutcome, ProcessLauncher};
use std::io::Write;
use tracing::{debug, warn};

/// Runs external commands one at a time, to completion.
///
/// The executor keeps no state between commands besides the launcher itself:
/// every handle it obtains is released before [`Executor::execute`] returns.
pub struct Executor<L: ProcessLauncher> {
    launcher: L,
}

impl<L: ProcessLauncher> Executor<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    #[cfg(test)]
    pub(crate) fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Launch `command_line`, wait for the child and release it.
    ///
    /// The child's exit status is not inspected. The only error is a failed
    /// launch; a failed wait is logged and the handle is released anyway.
    pub fn run(&mut self, command_line: &CommandLine) -> Result<(), LaunchError> {
        debug!(command = %command_line, "creating process");
        let handle = match self.launcher.create(command_line) {
            LaunchOutcome::Started(handle) => handle,
            LaunchOutcome::Failed(err) => {
                debug!(code = err.code, "process creation failed");
                return Err(err);
            }
        };

        let mut child = ChildGuard::new(&mut self.launcher, handle);
        if let Err(err) = child.wait() {
            warn!(command = %command_line, error = %err, "waiting for child failed");
        }
        debug!(command = %command_line, "child finished, releasing handles");
        Ok(())
    }

    /// Launch `command_line` and report a launch failure to `out`.
    ///
    /// Never fails: the diagnostic is a single line with the OS error code and
    /// its description, and the caller moves on to the next command.
    pub fn execute(&mut self, command_line: &CommandLine, out: &mut dyn Write) {
        if let Err(err) = self.run(command_line) {
            if let Err(io_err) = writeln!(out, "{err}").and_then(|_| out.flush()) {
                warn!(error = %io_err, "could not print launch failure");
            }
        }
    }
}
