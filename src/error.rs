use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown priority class: '{0}'")]
pub struct ParsePriorityError(pub String);

/// Problems with a single interpreter line. None of these end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("no command given.")]
    NoCommand,

    #[error("unrecognized command: {0}")]
    Unrecognized(String),

    #[error("no priority code given.")]
    MissingPriority,

    #[error("no patient name given.")]
    MissingName,

    #[error("invalid priority code.")]
    InvalidPriority(#[from] ParsePriorityError),

    #[error("no patient id given.")]
    MissingArrival,

    #[error("invalid patient id: {0}")]
    InvalidArrival(String),

    #[error("no file name given.")]
    MissingFileName,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
