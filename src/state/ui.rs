// UI state - presentation settings and transient status messages
use std::time::{Duration, Instant};

pub struct UiState {
    pub show_hidden: bool,
    pub tree_width: f32,
    pub error_message: Option<(String, Instant, Duration)>,
}

impl UiState {
    pub fn new(show_hidden: bool, tree_width: f32) -> Self {
        Self {
            show_hidden,
            tree_width,
            error_message: None,
        }
    }

    pub fn set_error(&mut self, message: String, duration: Duration) {
        self.error_message = Some((message, Instant::now(), duration));
    }

    pub fn clear_expired_messages(&mut self) {
        if let Some((_, since, duration)) = &self.error_message {
            if since.elapsed() >= *duration {
                self.error_message = None;
            }
        }
    }
}
