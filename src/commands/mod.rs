pub mod greet;

use crate::cli::{help_text, Args, Command};
use crate::error::{CommandResult, GreeterError};

/// Dispatches execution to the appropriate command handler.
pub fn execute(args: &Args) -> CommandResult<String> {
    match &args.command {
        Some(Command::Hello) => {
            tracing::debug!(command = "hello", "dispatching command");
            Ok(greet::message(None))
        }
        Some(Command::Greet { name }) => {
            tracing::debug!(command = "greet", %name, "dispatching command");
            Ok(greet::message(Some(name)))
        }
        Some(Command::Unrecognized(tokens)) => {
            let token = tokens.first().cloned().unwrap_or_default();
            tracing::debug!(%token, "rejecting unknown command");
            Err(GreeterError::UnknownCommand {
                token,
                help: help_text(),
            })
        }
        None => {
            tracing::debug!("no command given");
            Err(GreeterError::MissingCommand { help: help_text() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execute_tokens(tokens: &[&str]) -> CommandResult<String> {
        let args = Args::try_from_tokens(tokens.iter().copied())?;
        execute(&args)
    }

    #[test]
    fn hello_prints_default_greeting() {
        assert_eq!(execute_tokens(&["hello"]).unwrap(), "Hello, World!");
    }

    #[test]
    fn greet_uses_the_name() {
        assert_eq!(execute_tokens(&["greet", "Ada"]).unwrap(), "Hello, Ada!");
    }

    #[test]
    fn unknown_command_is_reported_by_name() {
        let err = execute_tokens(&["foo"]).unwrap_err();
        match &err {
            GreeterError::UnknownCommand { token, .. } => assert_eq!(token, "foo"),
            other => panic!("unexpected error: {other:?}"),
        }
        let rendered = err.to_string();
        assert!(rendered.starts_with("Unknown command: foo"));
        assert!(rendered.contains("Usage:"));
    }

    #[test]
    fn missing_command_is_unknown() {
        let err = execute_tokens(&[]).unwrap_err();
        assert!(matches!(err, GreeterError::MissingCommand { .. }));
        assert!(err.to_string().starts_with("Unknown command"));
    }

    #[test]
    fn greet_without_name_is_a_usage_error() {
        let err = execute_tokens(&["greet"]).unwrap_err();
        assert!(matches!(err, GreeterError::Usage(_)));
    }
}
