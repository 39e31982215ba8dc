use argh::FromArgs;

/// The default prompt.
pub const DEFAULT_PROMPT: &str = "> ";

/// A minimal interactive shell that runs one external program at a time.
#[derive(FromArgs, Debug)]
pub struct ShellArgs {
    /// run a single command line and exit
    #[argh(option, short = 'c')]
    pub command: Option<String>,

    /// prompt shown before each line
    #[argh(option, default = "DEFAULT_PROMPT.to_owned()")]
    pub prompt: String,

    /// do not print the welcome banner
    #[argh(switch, short = 'q')]
    pub quiet: bool,

    /// log filter used when RUST_LOG is not set (e.g. "debug")
    #[argh(option, default = "String::from(\"warn\")")]
    pub log: String,
}

/// Front-end settings of the [`Interpreter`](crate::Interpreter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prompt: String,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_owned(),
            quiet: false,
        }
    }
}

impl ShellArgs {
    pub fn settings(&self) -> Settings {
        Settings {
            prompt: self.prompt.clone(),
            quiet: self.quiet,
        }
    }
}
