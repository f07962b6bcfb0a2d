use thiserror::Error;

use crate::lexer::tokens::Token;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds the report for an `Illegal` token.
    pub fn unrecognised(token: &Token) -> Self {
        Error::UnrecognisedToken {
            token: token.escaped_value(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnrecognisedToken { .. } => "UnrecognisedToken",
            Error::Io(_) => "Io",
        }
    }

    pub fn get_tip(&self) -> String {
        match self {
            Error::UnrecognisedToken { token } => format!("unexpected character '{}'", token),
            Error::Io(e) => e.to_string(),
        }
    }
}

/// Renders `error` the way the REPL reports it: `Error: <name> (<tip>)`.
pub fn format_error(error: &Error) -> String {
    format!("Error: {} ({})", error.get_error_name(), error.get_tip())
}
