use anyhow::{Context, Result, bail};
use clap::Parser;
use hotdog_core::{AppConfig, HttpClassifier, ImageBlob, LabelPolicy, run_upload};
use std::path::PathBuf;

/// Classify a single image file against the configured endpoint.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image file to send (any file is accepted)
    image: PathBuf,

    /// TOML config file; defaults apply when it does not exist
    #[arg(long, default_value = "hotdog.toml")]
    config: PathBuf,

    /// Override the classifier endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Args {
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut cfg = AppConfig::load_or_default(&self.config)?;
        if let Some(endpoint) = &self.endpoint {
            cfg.classifier.endpoint = endpoint.clone();
        }
        if self.timeout_secs.is_some() {
            cfg.classifier.timeout_secs = self.timeout_secs;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let cfg = args.resolve_config()?;

    let blob = ImageBlob::from_path(&args.image)?;
    let classifier = HttpClassifier::new(&cfg.classifier)?;
    let policy = LabelPolicy::from(&cfg.labels);

    let Some(result) = run_upload(&classifier, &policy, Some(&blob)) else {
        bail!("{} is empty, nothing to classify", args.image.display());
    };
    let outcome = result.with_context(|| format!("classifying {}", args.image.display()))?;
    println!(
        "{}\t{:?}\t{}",
        outcome.prediction.label, outcome.prediction.verdict, outcome.caption
    );
    Ok(())
}
