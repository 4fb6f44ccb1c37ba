// Tree pane state - expansion set and cached child listings
use crate::entry::FileEntry;
use crate::io;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Which tree nodes are open, and what their child directories were the
/// last time we looked. The cache belongs to the view: it is dropped
/// wholesale on every navigation so the tree never goes stale across one.
#[derive(Default)]
pub struct TreeState {
    expanded: HashSet<PathBuf>,
    children: HashMap<PathBuf, Vec<FileEntry>>,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level directories the tree grows from.
    pub fn roots() -> Vec<PathBuf> {
        #[cfg(unix)]
        {
            vec![PathBuf::from("/")]
        }
        #[cfg(windows)]
        {
            ('A'..='Z')
                .map(|letter| PathBuf::from(format!("{}:\\", letter)))
                .filter(|root| root.exists())
                .collect()
        }
    }

    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.contains(path)
    }

    pub fn toggle(&mut self, path: &Path) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_path_buf());
        }
    }

    /// Child directories of a node, cached until the next invalidation.
    pub fn children(&mut self, path: &Path, show_hidden: bool) -> Vec<FileEntry> {
        if let Some(cached) = self.children.get(path) {
            return cached.clone();
        }
        let entries = io::read_subdirectories(path, show_hidden);
        self.children.insert(path.to_path_buf(), entries.clone());
        entries
    }

    /// Drop cached listings so the next frame re-reads them.
    pub fn invalidate(&mut self) {
        self.children.clear();
    }

    /// Make `path` visible: expand every ancestor and re-read listings.
    pub fn reveal(&mut self, path: &Path) {
        self.invalidate();
        let mut ancestor = path.parent();
        while let Some(dir) = ancestor {
            self.expanded.insert(dir.to_path_buf());
            ancestor = dir.parent();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_toggle_flips_expansion() {
        let mut tree = TreeState::new();
        let path = Path::new("/a/b");
        assert!(!tree.is_expanded(path));
        tree.toggle(path);
        assert!(tree.is_expanded(path));
        tree.toggle(path);
        assert!(!tree.is_expanded(path));
    }

    #[test]
    fn test_reveal_expands_all_ancestors() {
        let mut tree = TreeState::new();
        tree.reveal(Path::new("/a/b/c"));
        assert!(tree.is_expanded(Path::new("/")));
        assert!(tree.is_expanded(Path::new("/a")));
        assert!(tree.is_expanded(Path::new("/a/b")));
        assert!(!tree.is_expanded(Path::new("/a/b/c")));
    }

    #[test]
    fn test_children_are_cached_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("one")).unwrap();

        let mut tree = TreeState::new();
        assert_eq!(tree.children(dir.path(), false).len(), 1);

        fs::create_dir(dir.path().join("two")).unwrap();
        assert_eq!(tree.children(dir.path(), false).len(), 1);

        tree.invalidate();
        assert_eq!(tree.children(dir.path(), false).len(), 2);
    }
}
