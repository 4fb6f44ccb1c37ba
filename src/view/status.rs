// Status bar - entry count and transient errors
use crate::app::Vantage;
use crate::style;
use eframe::egui;

impl Vantage {
    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} items", self.entries.len()));
            if let Some((message, _, _)) = &self.ui.error_message {
                style::truncated_label(
                    ui,
                    egui::RichText::new(format!(" | {}", message)).color(egui::Color32::RED),
                );
            }
        });
    }
}
