use std::{ffi::OsString, iter};

use clap::{CommandFactory, Parser, Subcommand};

/// Name the parser reports in usage and help output.
pub const BIN_NAME: &str = "greeter";

/// Command-line arguments for the greeter CLI.
#[derive(Debug, Parser)]
#[command(
    name = BIN_NAME,
    version,
    about = "Prints a friendly greeting.",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Commands the router knows how to dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the default greeting.
    Hello,
    /// Greet someone by name.
    Greet {
        /// Name to put in the greeting.
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    // Any other first token, reported back as an unknown command.
    #[command(external_subcommand)]
    Unrecognized(Vec<String>),
}

impl Args {
    /// Parses argument tokens that exclude the program name.
    pub fn try_from_tokens<I, T>(tokens: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = iter::once(OsString::from(BIN_NAME)).chain(tokens.into_iter().map(Into::into));
        Self::try_parse_from(argv)
    }
}

/// Returns the first token when it looks like a flag.
pub fn leading_flag(tokens: &[OsString]) -> Option<String> {
    let first = tokens.first()?.to_string_lossy();
    first.starts_with('-').then(|| first.into_owned())
}

/// Full help text, without terminal styling.
pub fn help_text() -> String {
    let mut command = Args::command();
    command.render_help().to_string()
}
