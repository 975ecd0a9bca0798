use eframe::egui;
use hotdog_core::Stylesheet;

pub(super) fn apply_stylesheet(ctx: &egui::Context, sheet: &Stylesheet) {
    if let Some(dark) = sheet.dark_mode {
        ctx.set_theme(if dark {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
    }
    ctx.all_styles_mut(|style| {
        if let Some(size) = sheet.heading_size {
            style
                .text_styles
                .insert(egui::TextStyle::Heading, egui::FontId::proportional(size));
        }
        if let Some(size) = sheet.body_size {
            for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
                style
                    .text_styles
                    .insert(text_style, egui::FontId::proportional(size));
            }
        }
    });
}
