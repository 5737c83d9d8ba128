use std::path::PathBuf;

use shared::domain::CourseId;
use thiserror::Error;

/// A submission that never produced a response from the collector.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("collector disconnected: {0}")]
    Disconnected(String),
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("unknown course {0}")]
    UnknownCourse(CourseId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid collector url '{url}': {source}")]
    InvalidCollectorUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("collector url '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
