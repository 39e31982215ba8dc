use crate::argv::split_command_line;
use crate::command::CommandLine;
use crate::error::{ErrorCode, LaunchError};
use crate::launcher::{LaunchOutcome, ProcessLauncher};
use std::ffi::CStr;
use std::io;
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// Launches commands with `fork`/`exec` through [`std::process::Command`].
///
/// The line is split into words with the same rules the Windows loader uses,
/// and the first word is looked up in `PATH`. No shell is involved. The child
/// shares the parent's console, environment and working directory.
///
/// There is no thread handle on Unix: the [`Child`] is the whole handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixLauncher;

impl ProcessLauncher for UnixLauncher {
    type Handle = Child;

    fn create(&mut self, command_line: &CommandLine) -> LaunchOutcome<Child> {
        let argv = split_command_line(command_line.as_str());
        let Some((program, args)) = argv.split_first() else {
            let code = libc::EINVAL;
            return LaunchOutcome::Failed(LaunchError::new(code as ErrorCode, describe(code)));
        };

        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn();
        match spawned {
            Ok(child) => {
                debug!(pid = child.id(), program = %program, "spawned child");
                LaunchOutcome::Started(child)
            }
            Err(err) => LaunchOutcome::Failed(launch_error(&err)),
        }
    }

    fn wait(&mut self, child: &mut Child) -> io::Result<()> {
        let status = child.wait()?;
        debug!(pid = child.id(), %status, "child exited");
        Ok(())
    }

    fn release(&mut self, child: Child) {
        debug!(pid = child.id(), "releasing child");
        drop(child);
    }
}

fn launch_error(err: &io::Error) -> LaunchError {
    match err.raw_os_error() {
        Some(code) => LaunchError::new(code as ErrorCode, describe(code)),
        // Rejected before reaching the OS, e.g. a NUL byte inside the line.
        None => LaunchError::new(libc::EINVAL as ErrorCode, Some(err.to_string())),
    }
}

/// The system's description of `errno`, if it has one.
fn describe(code: i32) -> Option<String> {
    let mut buf = [0 as libc::c_char; 256];
    // SAFETY: the buffer is valid for its whole length and strerror_r
    // NUL-terminates whatever it writes on success.
    let rc = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: see above.
    let message = unsafe { CStr::from_ptr(buf.as_ptr()) };
    Some(message.to_string_lossy().into_owned())
}
