// Application state and the per-frame update loop
use crate::config::Config;
use crate::entry::FileEntry;
use crate::io;
use crate::nav::{NavError, NavIntent, NavOutcome, NavigationController};
use crate::state::{TreeState, UiState};
use crate::style;
use eframe::egui;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct Vantage {
    pub nav: NavigationController,
    pub entries: Vec<FileEntry>,
    pub selected: Option<usize>,
    pub tree: TreeState,
    pub ui: UiState,
    pub config: Config,
}

impl Vantage {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            nav: NavigationController::new(),
            entries: Vec::new(),
            selected: None,
            tree: TreeState::new(),
            ui: UiState::new(config.ui.show_hidden, config.window.tree_width),
            config,
        };
        app.open_start_directory();
        app
    }

    /// First candidate that resolves wins: the configured start directory,
    /// home, the process working directory, the file system root.
    fn open_start_directory(&mut self) {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(start) = &self.config.ui.start_dir {
            candidates.push(start.clone());
        }
        if let Some(dirs) = directories::UserDirs::new() {
            candidates.push(dirs.home_dir().to_path_buf());
        }
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd);
        }
        candidates.push(PathBuf::from("/"));

        for candidate in candidates {
            if let Ok(NavOutcome::Moved(path)) = self.nav.navigate_to_path(&candidate) {
                self.tree.reveal(&path);
                self.refresh_entries();
                return;
            }
        }
        log::error!("no start directory could be opened");
    }

    /// Route one intent through the controller and push the result back
    /// out to the display state.
    pub(crate) fn dispatch(&mut self, intent: NavIntent) {
        match self.nav.handle(intent) {
            Ok(NavOutcome::Moved(path)) => {
                self.selected = None;
                self.tree.reveal(&path);
                self.refresh_entries();
            }
            Ok(NavOutcome::Unchanged) => {}
            // The view disables the control, so this is just defensive.
            Err(NavError::NoHistory) => {}
            Err(error) => {
                let duration = error.display_duration();
                self.ui.set_error(error.to_string(), duration);
            }
        }
    }

    pub(crate) fn refresh_entries(&mut self) {
        let Some(path) = self.nav.current().map(Path::to_path_buf) else {
            return;
        };
        match io::read_directory(&path, self.ui.show_hidden) {
            Ok(entries) => self.entries = entries,
            Err(error) => {
                self.entries.clear();
                self.ui.set_error(
                    format!("Cannot read {}: {}", path.display(), error),
                    Duration::from_secs(3),
                );
            }
        }
    }

    /// Re-list after a display-only change (hidden toggle). Not a navigation.
    pub(crate) fn relist(&mut self) {
        self.tree.invalidate();
        self.refresh_entries();
    }

    pub(crate) fn open_in_system(&mut self, path: &Path) {
        if let Err(error) = open::that(path) {
            self.ui.set_error(
                format!("Could not open {}: {}", path.display(), error),
                Duration::from_secs(3),
            );
        }
    }

    pub(crate) fn persist_config(&mut self) {
        self.config.ui.show_hidden = self.ui.show_hidden;
        self.config.window.tree_width = self.ui.tree_width;
        if let Err(error) = self.config.save() {
            log::warn!("failed to save config: {}", error);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) -> Option<NavIntent> {
        if ctx.wants_keyboard_input() {
            return None;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) {
            return Some(NavIntent::Up);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft) && i.modifiers.alt) {
            return Some(NavIntent::Back);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight) && i.modifiers.alt) {
            return Some(NavIntent::Forward);
        }
        None
    }
}

impl eframe::App for Vantage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.clear_expired_messages();
        if self.ui.error_message.is_some() {
            // keep repainting so the message disappears on schedule
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        let mut pending = self.handle_keys(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui, &mut pending);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::SidePanel::left("tree")
            .resizable(true)
            .default_width(self.ui.tree_width)
            .width_range(style::TREE_MIN..=style::TREE_MAX)
            .show(ctx, |ui| {
                self.ui.tree_width = ui.available_width();
                self.render_tree_pane(ui, &mut pending);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_entry_list(ui, &mut pending);
        });

        if let Some(intent) = pending {
            self.dispatch(intent);
        }
    }
}
