//! Core of the hot dog classifier: send an uploaded image to a remote
//! classification endpoint and turn its answer into a verdict to render.

pub mod assets;
pub mod client;
pub mod config;
pub mod error;
pub mod label;
pub mod upload;

pub use assets::{Assets, Stylesheet};
pub use client::{Classify, HttpClassifier};
pub use config::{AppConfig, AssetPaths, ClassifierConfig, LabelConfig};
pub use error::{AssetError, ClassifyError, ConfigError, UploadError};
pub use label::{LabelPolicy, Prediction, Verdict, normalize_label};
pub use upload::{ImageBlob, Indicator, Outcome, run_upload};
