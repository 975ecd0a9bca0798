use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://img.freepik.com/premium-vector/hotdog-pattern-background-food-vector-illustration_463676-5.jpg?w=1380";
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-image";
pub const DEFAULT_POSITIVE_LABEL: &str = "Hotdog";
pub const DEFAULT_NEGATIVE_LABEL: &str = "Not Hotdog";

/// Top-level configuration, usually read from `hotdog.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub labels: LabelConfig,
    pub assets: AssetPaths,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Where and how classification requests are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub endpoint: String,
    pub content_type: String,
    /// Request timeout; `None` keeps the HTTP client's own default.
    pub timeout_secs: Option<u64>,
}

impl ClassifierConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            timeout_secs: None,
        }
    }
}

/// Label vocabulary the endpoint answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub positive: String,
    pub negative: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE_LABEL.to_string(),
            negative: DEFAULT_NEGATIVE_LABEL.to_string(),
        }
    }
}

/// Indicator images and the optional stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub positive_icon: PathBuf,
    pub negative_icon: PathBuf,
    pub stylesheet: Option<PathBuf>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            positive_icon: PathBuf::from("assets/hotdog.png"),
            negative_icon: PathBuf::from("assets/not_hotdog.png"),
            stylesheet: None,
        }
    }
}
