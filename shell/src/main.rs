use anyhow::Context;
use simple_shell::Interpreter;
use simple_shell::NativeLauncher;
use simple_shell::config::ShellArgs;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args: ShellArgs = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut shell = Interpreter::new(NativeLauncher::default(), args.settings());
    match args.command {
        Some(line) => {
            shell.handle_line(&line, &mut std::io::stdout());
        }
        None => shell.repl().context("interactive session failed")?,
    }
    Ok(())
}
