mod style;
mod upload;

use eframe::{App, Frame, egui};
use hotdog_core::{Assets, HttpClassifier, ImageBlob, Indicator, LabelPolicy, Outcome};
use std::sync::Arc;

const INDICATOR_HEIGHT: f32 = 160.0;

/// Image currently on screen, keyed by a URI unique to this upload.
struct Shown {
    uri: String,
    bytes: Arc<[u8]>,
}

pub struct UiApp {
    classifier: HttpClassifier,
    policy: LabelPolicy,
    positive_icon: Arc<[u8]>,
    negative_icon: Arc<[u8]>,
    shown: Option<Shown>,
    outcome: Option<Outcome>,
    status: String,
    uploads: u64,
}

impl UiApp {
    pub fn new(
        ctx: &egui::Context,
        classifier: HttpClassifier,
        policy: LabelPolicy,
        assets: Assets,
    ) -> Self {
        if let Some(sheet) = &assets.stylesheet {
            style::apply_stylesheet(ctx, sheet);
        }
        Self {
            classifier,
            policy,
            positive_icon: Arc::from(assets.icon(Indicator::Positive)),
            negative_icon: Arc::from(assets.icon(Indicator::Negative)),
            shown: None,
            outcome: None,
            status: String::new(),
            uploads: 0,
        }
    }

    fn show_image(&mut self, ctx: &egui::Context, blob: &ImageBlob) {
        if let Some(old) = self.shown.take() {
            ctx.forget_image(&old.uri);
        }
        self.uploads += 1;
        self.shown = Some(Shown {
            uri: format!("bytes://upload/{}/{}", self.uploads, blob.display_name()),
            bytes: Arc::from(blob.bytes.as_slice()),
        });
    }

    fn render_indicator(&self, ui: &mut egui::Ui, outcome: &Outcome) {
        let (uri, bytes) = match outcome.indicator {
            Indicator::Positive => ("bytes://indicator/positive", &self.positive_icon),
            Indicator::Negative => ("bytes://indicator/negative", &self.negative_icon),
        };
        ui.add(egui::Image::from_bytes(uri, Arc::clone(bytes)).max_height(INDICATOR_HEIGHT));
        ui.label(&outcome.caption);
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Upload an image").clicked() {
                    self.pick_and_classify(ctx);
                }
                if !self.status.is_empty() {
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(shown) = &self.shown else {
                ui.heading("Is it a hot dog? Upload a picture to find out.");
                return;
            };
            ui.columns(2, |cols| {
                cols[0].add(
                    egui::Image::from_bytes(shown.uri.clone(), Arc::clone(&shown.bytes))
                        .shrink_to_fit(),
                );
                if let Some(outcome) = &self.outcome {
                    self.render_indicator(&mut cols[1], outcome);
                    cols[1].add_space(8.0);
                    cols[1].heading(&outcome.prediction.label);
                }
            });
        });
    }
}
