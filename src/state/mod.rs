pub mod tree;
pub mod ui;

pub use tree::TreeState;
pub use ui::UiState;
