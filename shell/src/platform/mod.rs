//! Native [`ProcessLauncher`](crate::launcher::ProcessLauncher) implementations.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixLauncher as NativeLauncher;
#[cfg(windows)]
pub use windows::WindowsLauncher as NativeLauncher;
