// Entry list - the central table over the current directory
use crate::app::Vantage;
use crate::nav::NavIntent;
use crate::style;
use bytesize::ByteSize;
use chrono::{DateTime, Local};
use eframe::egui;
use std::path::PathBuf;

impl Vantage {
    pub(crate) fn render_entry_list(&mut self, ui: &mut egui::Ui, pending: &mut Option<NavIntent>) {
        // Deferred: applied after the table releases its borrows.
        let mut next_selection: Option<usize> = None;
        let mut open_request: Option<PathBuf> = None;

        egui::ScrollArea::vertical()
            .id_salt("list_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                use egui_extras::{Column, TableBuilder};
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::initial(style::ICON_COL_WIDTH))
                    .column(Column::remainder().clip(true))
                    .column(Column::initial(style::SIZE_COL_WIDTH))
                    .column(Column::initial(style::MODIFIED_COL_WIDTH))
                    .header(style::HEADER_HEIGHT, |mut header| {
                        header.col(|ui| {
                            ui.label("");
                        });
                        header.col(|ui| {
                            ui.label("Name");
                        });
                        header.col(|ui| {
                            ui.label("Size");
                        });
                        header.col(|ui| {
                            ui.label("Modified");
                        });
                    })
                    .body(|body| {
                        body.rows(style::ROW_HEIGHT, self.entries.len(), |mut row| {
                            let row_index = row.index();
                            let entry = &self.entries[row_index];
                            let is_selected = self.selected == Some(row_index);
                            row.set_selected(is_selected);

                            row.col(|ui| {
                                ui.label(entry.get_icon());
                            });
                            row.col(|ui| {
                                let response = style::truncated_label_with_sense(
                                    ui,
                                    entry.display_name(),
                                    egui::Sense::click(),
                                );
                                if response.double_clicked() {
                                    if entry.is_dir {
                                        *pending = Some(NavIntent::Entry(entry.path.clone()));
                                    } else {
                                        open_request = Some(entry.path.clone());
                                    }
                                } else if response.clicked() {
                                    next_selection = Some(row_index);
                                }
                            });
                            row.col(|ui| {
                                let size = if entry.is_dir {
                                    String::new()
                                } else {
                                    ByteSize(entry.size).to_string()
                                };
                                ui.label(size);
                            });
                            row.col(|ui| {
                                let modified: DateTime<Local> = entry.modified.into();
                                ui.label(modified.format("%Y-%m-%d %H:%M").to_string());
                            });
                        });
                    });
            });

        if let Some(index) = next_selection {
            self.selected = Some(index);
        }
        if let Some(path) = open_request {
            self.open_in_system(&path);
        }
    }
}
