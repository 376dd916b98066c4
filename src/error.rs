// Error handling for privca

use std::fmt;

/// Client library error type
#[derive(Debug)]
pub enum Error {
    /// A request violated the client-side contract (missing required field,
    /// malformed resource name, conflicting arguments).
    InvalidArgument(String),
    /// Client configuration could not be loaded or validated.
    Config(String),
    /// A request or response descriptor could not be encoded or decoded.
    Serialization(String),
    /// The transport failed before a remote status was produced.
    Transport(String),
    /// The remote service answered with an error status.
    Rpc { status: u16, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
            Error::Rpc { status, message } => {
                write!(f, "RPC failed with status {}: {}", status, message)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

/// Extension trait for attaching context when loading configuration
pub trait ConfigResultExt<T> {
    /// Convert any displayable error to Error::Config with a context prefix
    fn config_err(self, context: &str) -> Result<T, Error>;
}

impl<T, E: std::fmt::Display> ConfigResultExt<T> for Result<T, E> {
    fn config_err(self, context: &str) -> Result<T, Error> {
        self.map_err(|e| Error::Config(format!("{}: {}", context, e)))
    }
}
