use crate::config::AssetPaths;
use crate::error::AssetError;
use crate::upload::Indicator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Presentation tweaks read from the optional stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stylesheet {
    pub dark_mode: Option<bool>,
    /// Heading font size in points.
    pub heading_size: Option<f32>,
    pub body_size: Option<f32>,
}

/// Indicator images (still encoded) plus the parsed stylesheet.
#[derive(Debug, Clone)]
pub struct Assets {
    pub positive_icon: Vec<u8>,
    pub negative_icon: Vec<u8>,
    pub stylesheet: Option<Stylesheet>,
}

impl Assets {
    /// Load everything up front. Any configured file that is absent is fatal.
    pub fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let positive_icon = read_asset(&paths.positive_icon)?;
        let negative_icon = read_asset(&paths.negative_icon)?;
        let stylesheet = match &paths.stylesheet {
            Some(path) => {
                let raw = read_asset(path)?;
                let text = String::from_utf8_lossy(&raw);
                let sheet: Stylesheet = toml::from_str(&text).map_err(|source| AssetError::Stylesheet {
                    path: path.clone(),
                    source,
                })?;
                Some(sheet)
            }
            None => None,
        };
        tracing::debug!(
            "loaded indicator assets ({} + {} bytes, stylesheet: {})",
            positive_icon.len(),
            negative_icon.len(),
            stylesheet.is_some()
        );
        Ok(Self {
            positive_icon,
            negative_icon,
            stylesheet,
        })
    }

    pub fn icon(&self, indicator: Indicator) -> &[u8] {
        match indicator {
            Indicator::Positive => &self.positive_icon,
            Indicator::Negative => &self.negative_icon,
        }
    }
}

fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }
    fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })
}
