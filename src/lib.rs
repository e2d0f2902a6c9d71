use std::{ffi::OsString, io::Write};

use anyhow::Context;
use clap::error::ErrorKind;

pub mod cli;
pub mod commands;
pub mod error;

use crate::error::GreeterError;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate.
pub fn run() -> Result<()> {
    init_tracing();

    let stdout = std::io::stdout();
    run_from(std::env::args_os().skip(1), &mut stdout.lock())
}

/// Routes `tokens` (program name excluded) and writes the result to `out`.
pub fn run_from<I, T, W>(tokens: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();
    let args = match cli::Args::try_from_tokens(tokens.iter().cloned()) {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            write!(out, "{err}").context("failed to write help")?;
            return Ok(());
        }
        Err(err) if err.kind() == ErrorKind::UnknownArgument => {
            // a flag in the command position is still an unknown command
            let err = match cli::leading_flag(&tokens) {
                Some(token) => GreeterError::UnknownCommand {
                    token,
                    help: cli::help_text(),
                },
                None => GreeterError::from(err),
            };
            return Err(err.into());
        }
        Err(err) => return Err(GreeterError::from(err).into()),
    };

    let message = commands::execute(&args)?;
    writeln!(out, "{message}").context("failed to write greeting")?;
    Ok(())
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
