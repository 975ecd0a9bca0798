use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single classification request.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The endpoint could not be reached or the transport broke mid-request.
    #[error("network error talking to {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },
    /// Non-2xx status or an unreadable body.
    #[error("invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

impl ClassifyError {
    pub(crate) fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClassifyError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else if err.is_decode() {
            ClassifyError::InvalidResponse {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        } else {
            ClassifyError::Network {
                endpoint: endpoint.to_string(),
                source: err,
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Problems loading the indicator images or the stylesheet.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset file is missing: {0}")]
    Missing(PathBuf),
    #[error("cannot read asset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid stylesheet {path}: {source}")]
    Stylesheet {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors of a whole upload cycle: obtaining the bytes, then classifying them.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("cannot read image {path}: {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
