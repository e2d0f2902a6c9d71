use thiserror::Error;

pub type CommandResult<T> = Result<T, GreeterError>;

#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("Unknown command: {token}\n\n{help}")]
    UnknownCommand { token: String, help: String },

    #[error("Unknown command: no command given\n\n{help}")]
    MissingCommand { help: String },

    #[error(transparent)]
    Usage(#[from] clap::Error),
}
