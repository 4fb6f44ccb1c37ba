// Directory tree pane - lazily expanded, one node per directory
use crate::app::Vantage;
use crate::nav::NavIntent;
use crate::state::TreeState;
use crate::style;
use eframe::egui;
use std::path::PathBuf;

impl Vantage {
    pub(crate) fn render_tree_pane(&mut self, ui: &mut egui::Ui, pending: &mut Option<NavIntent>) {
        ui.add_space(4.0);
        egui::ScrollArea::vertical()
            .id_salt("tree_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width());
                for root in TreeState::roots() {
                    let label = root.display().to_string();
                    self.render_tree_node(ui, root, &label, pending);
                }
            });
    }

    fn render_tree_node(
        &mut self,
        ui: &mut egui::Ui,
        path: PathBuf,
        label: &str,
        pending: &mut Option<NavIntent>,
    ) {
        let is_expanded = self.tree.is_expanded(&path);
        let is_current = self.nav.current() == Some(path.as_path());
        let text = if is_current {
            egui::RichText::new(label).color(style::accent())
        } else {
            egui::RichText::new(label)
        };

        let response = egui::CollapsingHeader::new(text)
            .id_salt(&path)
            .open(Some(is_expanded))
            .show(ui, |ui| {
                for child in self.tree.children(&path, self.ui.show_hidden) {
                    self.render_tree_node(ui, child.path.clone(), &child.name, pending);
                }
            });

        // A header click both opens the node and navigates to it.
        if response.header_response.clicked() {
            self.tree.toggle(&path);
            *pending = Some(NavIntent::Tree(path));
        }
    }
}
