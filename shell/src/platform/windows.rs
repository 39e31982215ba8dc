use crate::command::CommandLine;
use crate::error::{ErrorCode, LaunchError};
use crate::launcher::{LaunchOutcome, ProcessLauncher};
use std::ffi::OsStr;
use std::io;
use std::os::windows::ffi::OsStrExt;
use std::ptr;
use tracing::{debug, warn};
use windows_sys::Win32::Foundation::{CloseHandle, GetLastError, HANDLE, WAIT_FAILED};
use windows_sys::Win32::System::Diagnostics::Debug::{
    FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS, FormatMessageW,
};
use windows_sys::Win32::System::Threading::{
    CreateProcessW, INFINITE, PROCESS_INFORMATION, STARTUPINFOW, WaitForSingleObject,
};

/// Launches commands with `CreateProcessW`.
///
/// The command line goes to the loader untouched; it picks the program and
/// splits the arguments itself. The child shares the parent's console,
/// environment and working directory. No handles are inherited.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsLauncher;

/// The process and primary thread handles returned by `CreateProcessW`.
#[derive(Debug)]
pub struct ProcessHandles {
    process: HANDLE,
    thread: HANDLE,
    pid: u32,
}

impl ProcessLauncher for WindowsLauncher {
    type Handle = ProcessHandles;

    fn create(&mut self, command_line: &CommandLine) -> LaunchOutcome<ProcessHandles> {
        // CreateProcessW may write into the command line buffer.
        let mut wide: Vec<u16> = OsStr::new(command_line.as_str())
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        // SAFETY: both structures are plain data for which all-zero is valid.
        let mut startup: STARTUPINFOW = unsafe { std::mem::zeroed() };
        startup.cb = size_of::<STARTUPINFOW>() as u32;
        let mut info: PROCESS_INFORMATION = unsafe { std::mem::zeroed() };

        // SAFETY: `wide` is NUL-terminated and outlives the call; every other
        // pointer is either null or points to a live local.
        let ok = unsafe {
            CreateProcessW(
                ptr::null(),
                wide.as_mut_ptr(),
                ptr::null(),
                ptr::null(),
                0,
                0,
                ptr::null(),
                ptr::null(),
                &startup,
                &mut info,
            )
        };
        if ok == 0 {
            // SAFETY: no other API call happened since CreateProcessW.
            let code = unsafe { GetLastError() };
            return LaunchOutcome::Failed(LaunchError::new(code as ErrorCode, describe(code)));
        }

        debug!(pid = info.dwProcessId, "created process");
        LaunchOutcome::Started(ProcessHandles {
            process: info.hProcess,
            thread: info.hThread,
            pid: info.dwProcessId,
        })
    }

    fn wait(&mut self, handles: &mut ProcessHandles) -> io::Result<()> {
        // SAFETY: the process handle is open until `release`.
        let rc = unsafe { WaitForSingleObject(handles.process, INFINITE) };
        if rc == WAIT_FAILED {
            return Err(io::Error::last_os_error());
        }
        debug!(pid = handles.pid, "process terminated");
        Ok(())
    }

    fn release(&mut self, handles: ProcessHandles) {
        debug!(pid = handles.pid, "closing process and thread handles");
        for (what, handle) in [("process", handles.process), ("thread", handles.thread)] {
            // SAFETY: each handle is closed exactly once, here, since
            // `handles` is consumed.
            if unsafe { CloseHandle(handle) } == 0 {
                warn!(
                    pid = handles.pid,
                    handle = what,
                    error = %io::Error::last_os_error(),
                    "CloseHandle failed"
                );
            }
        }
    }
}

/// The system's description of a Win32 error code, if it has one.
fn describe(code: u32) -> Option<String> {
    let mut buf = [0u16; 512];
    // SAFETY: the buffer is valid for `buf.len()` UTF-16 units and no
    // insert arguments are used.
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            ptr::null(),
            code,
            0,
            buf.as_mut_ptr(),
            buf.len() as u32,
            ptr::null(),
        )
    };
    if len == 0 {
        return None;
    }
    Some(String::from_utf16_lossy(&buf[..len as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::Executor;

    fn line(s: &str) -> CommandLine {
        CommandLine::new(s).unwrap()
    }

    #[test]
    fn missing_program_is_file_not_found() {
        match WindowsLauncher.create(&line("nonexistent_program_xyz")) {
            LaunchOutcome::Failed(err) => {
                assert_eq!(err.code, 2);
                assert!(!err.message.is_empty());
            }
            LaunchOutcome::Started(_) => panic!("nonexistent program started"),
        }
    }

    #[test]
    fn nonzero_exit_is_not_an_error() {
        let mut exec = Executor::new(WindowsLauncher);
        assert_eq!(exec.run(&line("cmd.exe /c exit 3")), Ok(()));
    }
}
