use crate::command::CommandLine;
use crate::error::LaunchError;
use std::io;

/// Result of asking the OS to create a process.
#[derive(Debug)]
pub enum LaunchOutcome<H> {
    /// The process exists; the handle is owned by the caller.
    Started(H),
    /// Nothing was created, so there is nothing to release.
    Failed(LaunchError),
}

/// The OS facilities the executor needs, one implementation per platform.
///
/// Handles are exclusively owned by whoever received them from
/// [`ProcessLauncher::create`]. [`ProcessLauncher::release`] takes the handle
/// by value, so it cannot be released twice.
pub trait ProcessLauncher {
    /// Live process plus whatever else the OS hands out with it
    /// (the primary thread on Windows).
    type Handle;

    /// Create a process from `command_line`, passed through unmodified.
    fn create(&mut self, command_line: &CommandLine) -> LaunchOutcome<Self::Handle>;

    /// Block without timeout until the process terminates.
    ///
    /// Any exit status counts as completion. An error means the OS could not
    /// wait on the handle.
    fn wait(&mut self, handle: &mut Self::Handle) -> io::Result<()>;

    /// Give the handle back to the OS.
    fn release(&mut self, handle: Self::Handle);
}

/// Owns a started handle and releases it when dropped.
///
/// Release happens on every way out of the scope: normal return, an early
/// return after a failed wait, or unwinding.
pub(crate) struct ChildGuard<'a, L: ProcessLauncher> {
    launcher: &'a mut L,
    handle: Option<L::Handle>,
}

impl<'a, L: ProcessLauncher> ChildGuard<'a, L> {
    pub(crate) fn new(launcher: &'a mut L, handle: L::Handle) -> Self {
        Self {
            launcher,
            handle: Some(handle),
        }
    }

    pub(crate) fn wait(&mut self) -> io::Result<()> {
        match self.handle.as_mut() {
            Some(handle) => self.launcher.wait(handle),
            None => Ok(()),
        }
    }
}

impl<L: ProcessLauncher> Drop for ChildGuard<'_, L> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.launcher.release(handle);
        }
    }
}
