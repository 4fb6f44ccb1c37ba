// Navigation controller - turns view intents into history transitions
use crate::nav::{
    FileSystemProvider, NavError, NavigationHistory, OsFileSystem, PathResolver, ResolvedPath,
};
use std::path::{Path, PathBuf};

/// A navigation request produced by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Text submitted from the address bar.
    Address(String),
    /// Directory entry activated in the list.
    Entry(PathBuf),
    /// Directory clicked in the tree.
    Tree(PathBuf),
    Up,
    Back,
    Forward,
}

/// What a handled intent did to the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The current directory changed; the view should re-list it.
    Moved(PathBuf),
    /// Revisit of the current directory; nothing to re-list.
    Unchanged,
}

/// Owns the history and the address-bar text. All mutation of navigation
/// state funnels through `handle`; the view only ever reads `current()`,
/// the enablement flags, and `address_text` back out.
pub struct NavigationController<P = OsFileSystem> {
    resolver: PathResolver<P>,
    history: NavigationHistory,
    /// What the address bar shows. Rewritten to the canonical current path
    /// on success, reverted to it on failure.
    pub address_text: String,
}

impl NavigationController<OsFileSystem> {
    pub fn new() -> Self {
        Self::with_provider(OsFileSystem)
    }
}

impl<P: FileSystemProvider> NavigationController<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            resolver: PathResolver::new(provider),
            history: NavigationHistory::new(),
            address_text: String::new(),
        }
    }

    pub fn current(&self) -> Option<&Path> {
        self.history.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn handle(&mut self, intent: NavIntent) -> Result<NavOutcome, NavError> {
        let result = match intent {
            NavIntent::Address(text) => self.navigate_to(&text),
            NavIntent::Entry(path) | NavIntent::Tree(path) => self.navigate_to_path(&path),
            NavIntent::Up => self.go_up(),
            NavIntent::Back => self.go_back(),
            NavIntent::Forward => self.go_forward(),
        };
        match &result {
            Err(NavError::NoHistory) => log::debug!("history replay with nowhere to go"),
            Err(error) => log::warn!("navigation rejected: {}", error),
            Ok(_) => {}
        }
        result
    }

    /// Fresh navigation from address-bar text.
    pub fn navigate_to(&mut self, input: &str) -> Result<NavOutcome, NavError> {
        let resolved = self.resolver.resolve(input);
        self.commit_fresh(resolved, input.trim())
    }

    /// Fresh navigation from a candidate already in path form (list entry,
    /// tree click, go-up target).
    pub fn navigate_to_path(&mut self, candidate: &Path) -> Result<NavOutcome, NavError> {
        let resolved = self.resolver.resolve_path(candidate);
        self.commit_fresh(resolved, &candidate.display().to_string())
    }

    pub fn go_up(&mut self) -> Result<NavOutcome, NavError> {
        let parent = self
            .current()
            .and_then(|path| path.parent())
            .map(Path::to_path_buf);
        match parent {
            Some(parent) => self.navigate_to_path(&parent),
            None => {
                let shown = self
                    .current()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default();
                Err(NavError::NoParentDirectory(shown))
            }
        }
    }

    /// Replay one step backwards. Moves the cursor only; the stored path
    /// sequence is never altered by replay.
    pub fn go_back(&mut self) -> Result<NavOutcome, NavError> {
        let path = self.history.step_back()?.to_path_buf();
        self.address_text = path.display().to_string();
        Ok(NavOutcome::Moved(path))
    }

    /// Replay one step forwards; the mirror of `go_back`.
    pub fn go_forward(&mut self) -> Result<NavOutcome, NavError> {
        let path = self.history.step_forward()?.to_path_buf();
        self.address_text = path.display().to_string();
        Ok(NavOutcome::Moved(path))
    }

    /// Apply a resolved fresh navigation: branch history on a new
    /// directory, leave everything alone on a revisit, revert the address
    /// display on rejection.
    fn commit_fresh(
        &mut self,
        resolved: ResolvedPath,
        shown_input: &str,
    ) -> Result<NavOutcome, NavError> {
        match resolved {
            ResolvedPath::Directory(path) => {
                self.address_text = path.display().to_string();
                if self.current() == Some(path.as_path()) {
                    return Ok(NavOutcome::Unchanged);
                }
                self.history.visit(path.clone());
                log::debug!("navigated to {}", path.display());
                Ok(NavOutcome::Moved(path))
            }
            ResolvedPath::NotADirectory(path) => {
                self.revert_address();
                Err(NavError::NotADirectory(path.display().to_string()))
            }
            ResolvedPath::NotFound => {
                self.revert_address();
                Err(NavError::PathNotFound(shown_input.to_string()))
            }
        }
    }

    fn revert_address(&mut self) {
        self.address_text = self
            .current()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
    }

    #[cfg(test)]
    pub(crate) fn history(&self) -> &NavigationHistory {
        &self.history
    }
}
