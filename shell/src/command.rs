use std::fmt;

/// The text of an external command exactly as the user typed it.
///
/// A `CommandLine` is never empty. It is handed to process creation as one
/// string: no tokenization, quoting or escaping happens on the way. There is
/// no length limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(String);

impl CommandLine {
    /// Wrap `line`, or return `None` if it is empty.
    pub fn new(line: impl Into<String>) -> Option<Self> {
        let line = line.into();
        if line.is_empty() { None } else { Some(Self(line)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommandLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a single input line asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// The built-in `exit`.
    Exit,
    /// Anything else: launch it as a child process.
    External(CommandLine),
}

/// Whether the read loop should show another prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}
