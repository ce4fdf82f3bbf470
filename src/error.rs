use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-2xx response. `body` is the raw response text.
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    Failed(String),
}

impl TeamsError {
    /// Text shown in the error banner.
    ///
    /// API failures show the server's own message rather than the status line.
    pub fn banner_message(&self) -> String {
        match self {
            TeamsError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TeamsError>;
