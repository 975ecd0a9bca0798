//! File picking and the blocking classify call behind the upload button.

use super::UiApp;
use eframe::egui;
use hotdog_core::{ImageBlob, run_upload};
use rfd::FileDialog;
use std::time::Instant;

impl UiApp {
    /// Let the user pick any file, show it, and classify it.
    ///
    /// The request blocks the UI thread until the endpoint answers or the
    /// client times out.
    pub(super) fn pick_and_classify(&mut self, ctx: &egui::Context) {
        let Some(path) = FileDialog::new().set_directory(".").pick_file() else {
            return;
        };
        let blob = match ImageBlob::from_path(&path) {
            Ok(blob) => blob,
            Err(e) => {
                self.status = format!("Could not read file: {e}");
                return;
            }
        };
        if blob.is_empty() {
            self.status = format!("{} is empty, nothing to classify", blob.display_name());
            return;
        }

        self.outcome = None;
        self.show_image(ctx, &blob);
        let start = Instant::now();
        match run_upload(&self.classifier, &self.policy, Some(&blob)) {
            Some(Ok(outcome)) => {
                self.status = format!(
                    "{}: {:.1?}",
                    describe_upload(&blob),
                    start.elapsed()
                );
                self.outcome = Some(outcome);
            }
            Some(Err(e)) => {
                self.status = format!("Classification failed: {e}");
            }
            None => {}
        }
    }
}

/// Short human description of an upload, e.g. `dog.jpg (Jpeg, 12.3 KiB)`.
pub(super) fn describe_upload(blob: &ImageBlob) -> String {
    let kind = image::guess_format(&blob.bytes)
        .map(|f| format!("{f:?}"))
        .unwrap_or_else(|_| "unknown format".to_string());
    let kib = blob.bytes.len() as f64 / 1024.0;
    format!("{} ({kind}, {kib:.1} KiB)", blob.display_name())
}
