// Toolbar - history controls, up, address bar, hidden toggle
use crate::app::Vantage;
use crate::nav::NavIntent;
use eframe::egui;

impl Vantage {
    pub(crate) fn render_toolbar(&mut self, ui: &mut egui::Ui, pending: &mut Option<NavIntent>) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let back = ui
                .add_enabled(self.nav.can_go_back(), egui::Button::new("\u{25c0}"))
                .on_hover_text("Back");
            if back.clicked() {
                *pending = Some(NavIntent::Back);
            }

            let forward = ui
                .add_enabled(self.nav.can_go_forward(), egui::Button::new("\u{25b6}"))
                .on_hover_text("Forward");
            if forward.clicked() {
                *pending = Some(NavIntent::Forward);
            }

            if ui.button("\u{2b06}").on_hover_text("Up").clicked() {
                *pending = Some(NavIntent::Up);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.checkbox(&mut self.ui.show_hidden, "Hidden").changed() {
                    self.relist();
                    self.persist_config();
                }

                let response = ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::singleline(&mut self.nav.address_text),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    *pending = Some(NavIntent::Address(self.nav.address_text.clone()));
                }
            });
        });
        ui.add_space(4.0);
    }
}
