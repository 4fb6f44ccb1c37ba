// Visit history - the ordered list of directories and the position cursor
use crate::nav::NavError;
use std::path::{Path, PathBuf};

/// Browser-style linear history. Fresh visits branch: everything after the
/// current position is discarded before the new path is appended. Back and
/// forward only move the cursor and never touch the stored paths.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    entries: Vec<PathBuf>,
    position: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Path> {
        self.position.map(|index| self.entries[index].as_path())
    }

    pub fn can_go_back(&self) -> bool {
        self.position.map(|index| index > 0).unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        self.position
            .map(|index| index + 1 < self.entries.len())
            .unwrap_or(false)
    }

    /// Record a fresh navigation. Visiting the directory already under the
    /// cursor is a no-op; anything else abandons the forward branch.
    pub fn visit(&mut self, path: PathBuf) {
        if self.current() == Some(path.as_path()) {
            return;
        }
        if let Some(index) = self.position {
            self.entries.truncate(index + 1);
        }
        self.entries.push(path);
        self.position = Some(self.entries.len() - 1);
    }

    pub fn step_back(&mut self) -> Result<&Path, NavError> {
        match self.position {
            Some(index) if index > 0 => {
                self.position = Some(index - 1);
                Ok(self.entries[index - 1].as_path())
            }
            _ => Err(NavError::NoHistory),
        }
    }

    pub fn step_forward(&mut self) -> Result<&Path, NavError> {
        match self.position {
            Some(index) if index + 1 < self.entries.len() => {
                self.position = Some(index + 1);
                Ok(self.entries[index + 1].as_path())
            }
            _ => Err(NavError::NoHistory),
        }
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> Option<usize> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited(paths: &[&str]) -> NavigationHistory {
        let mut history = NavigationHistory::new();
        for path in paths {
            history.visit(PathBuf::from(path));
        }
        history
    }

    #[test]
    fn test_empty_history() {
        let history = NavigationHistory::new();
        assert_eq!(history.current(), None);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_step_on_empty_history_fails() {
        let mut history = NavigationHistory::new();
        assert_eq!(history.step_back().err(), Some(NavError::NoHistory));
        assert_eq!(history.step_forward().err(), Some(NavError::NoHistory));
    }

    #[test]
    fn test_visit_appends_and_moves_cursor() {
        let history = visited(&["/a", "/a/b", "/a/b/c"]);
        assert_eq!(history.current(), Some(Path::new("/a/b/c")));
        assert_eq!(history.position(), Some(2));
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_revisit_of_current_is_noop() {
        let mut history = visited(&["/a", "/a/b"]);
        history.visit(PathBuf::from("/a/b"));
        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.position(), Some(1));
    }

    #[test]
    fn test_no_consecutive_duplicates() {
        let mut history = NavigationHistory::new();
        for path in ["/a", "/a", "/b", "/b", "/a", "/a"] {
            history.visit(PathBuf::from(path));
        }
        let entries = history.entries();
        for pair in entries.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_step_back_moves_cursor_without_mutation() {
        let mut history = visited(&["/a", "/b", "/c"]);
        assert_eq!(history.step_back().unwrap(), Path::new("/b"));
        assert_eq!(history.entries().len(), 3);
        assert_eq!(history.position(), Some(1));
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_back_then_forward_restores_state() {
        let mut history = visited(&["/a", "/b", "/c"]);
        history.step_back().unwrap();
        let before = (
            history.current().map(Path::to_path_buf),
            history.can_go_back(),
            history.can_go_forward(),
        );
        history.step_back().unwrap();
        history.step_forward().unwrap();
        let after = (
            history.current().map(Path::to_path_buf),
            history.can_go_back(),
            history.can_go_forward(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_branch_truncation_discards_forward_entries() {
        let mut history = visited(&["/a", "/b", "/c"]);
        history.step_back().unwrap();
        history.step_back().unwrap();
        assert_eq!(history.position(), Some(0));

        history.visit(PathBuf::from("/d"));
        assert_eq!(history.entries(), &[PathBuf::from("/a"), PathBuf::from("/d")]);
        assert_eq!(history.position(), Some(1));
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_enablement_matches_cursor_after_every_step() {
        let mut history = visited(&["/a", "/b", "/c"]);
        while history.can_go_back() {
            let position = history.position().unwrap();
            assert_eq!(history.can_go_back(), position > 0);
            assert_eq!(
                history.can_go_forward(),
                position + 1 < history.entries().len()
            );
            history.step_back().unwrap();
        }
        assert_eq!(history.position(), Some(0));
        assert!(history.can_go_forward());
    }
}
