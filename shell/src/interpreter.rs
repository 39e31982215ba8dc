use crate::command::{CommandLine, Directive, Flow};
use crate::config::Settings;
use crate::error::ShellError;
use crate::executor::Executor;
use crate::launcher::ProcessLauncher;
use crate::platform::NativeLauncher;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use tracing::{debug, warn};

/// The built-in that ends the read loop.
pub const EXIT_TOKEN: &str = "exit";

pub const BANNER: &str = "Welcome to SimpleShell. Type 'exit' to quit.";
pub const FAREWELL: &str = "Exiting shell.";

/// Decide what a raw input line means.
///
/// Surrounding whitespace (including the line break) is dropped. Returns
/// `None` when there is nothing to do: a blank line, or a word that merely
/// starts with `exit` (such as `exitcode`), which is neither the built-in nor
/// ever launched. `exit` on its own or followed by whitespace is the built-in;
/// everything else is an external command.
pub fn classify(line: &str) -> Option<Directive> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(EXIT_TOKEN) {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some(Directive::Exit);
        }
        debug!(line, "ignoring line that starts with the exit token");
        return None;
    }
    CommandLine::new(line).map(Directive::External)
}

/// A minimal shell: reads lines, handles `exit`, and runs everything else as
/// a child process through an [`Executor`].
///
/// Example
/// ```no_run
/// use simple_shell::{Flow, Interpreter};
/// let mut sh: Interpreter = Interpreter::default();
/// let flow = sh.handle_line("echo hello", &mut std::io::stdout());
/// assert_eq!(flow, Flow::Continue);
/// ```
pub struct Interpreter<L: ProcessLauncher = NativeLauncher> {
    executor: Executor<L>,
    settings: Settings,
}

impl<L: ProcessLauncher> Interpreter<L> {
    pub fn new(launcher: L, settings: Settings) -> Self {
        Self {
            executor: Executor::new(launcher),
            settings,
        }
    }

    #[cfg(test)]
    pub(crate) fn executor(&self) -> &Executor<L> {
        &self.executor
    }

    /// Handle one input line, writing any output for the user to `out`.
    ///
    /// External commands run to completion before this returns.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Flow {
        match classify(line) {
            None => Flow::Continue,
            Some(Directive::Exit) => {
                if let Err(err) = writeln!(out, "{FAREWELL}") {
                    warn!(error = %err, "could not print farewell");
                }
                Flow::Stop
            }
            Some(Directive::External(command_line)) => {
                self.executor.execute(&command_line, out);
                Flow::Continue
            }
        }
    }

    /// Read-eval loop on the terminal until `exit`, end of input or Ctrl-C.
    pub fn repl(&mut self) -> Result<(), ShellError> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = std::io::stdout();
        self.run_loop(
            |prompt| {
                let line = rl.readline(prompt)?;
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                Ok(line)
            },
            &mut stdout,
        )
    }

    /// The read loop itself, over any source of lines.
    ///
    /// `read_line` is called with the prompt and returns the next line, or
    /// [`ReadlineError::Eof`] / [`ReadlineError::Interrupted`] to stop.
    pub fn run_loop<F>(&mut self, mut read_line: F, out: &mut dyn Write) -> Result<(), ShellError>
    where
        F: FnMut(&str) -> Result<String, ReadlineError>,
    {
        if !self.settings.quiet {
            writeln!(out, "{BANNER}")?;
        }

        loop {
            match read_line(&self.settings.prompt) {
                Ok(line) => {
                    if self.handle_line(&line, out) == Flow::Stop {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    writeln!(out, "Interrupted")?;
                    break;
                }
                Err(ReadlineError::Eof) => {
                    writeln!(out, "\n{FAREWELL}")?;
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        debug!("read loop finished");
        Ok(())
    }
}

impl Default for Interpreter<NativeLauncher> {
    fn default() -> Self {
        Self::new(NativeLauncher::default(), Settings::default())
    }
}
