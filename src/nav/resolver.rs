// Path resolution - classifies address input against the file system
use std::fs;
use std::path::{Path, PathBuf};

/// The three questions the navigation core asks of the platform:
/// existence, directory-ness, and canonical absolute form.
pub trait FileSystemProvider {
    fn exists(&self, path: &Path) -> bool;
    fn is_directory(&self, path: &Path) -> bool;
    fn canonical(&self, path: &Path) -> Option<PathBuf>;
}

/// Production provider backed by std::fs.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystemProvider for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonical(&self, path: &Path) -> Option<PathBuf> {
        fs::canonicalize(path).ok()
    }
}

/// Classification of a candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    /// Exists and is a directory; payload is the canonical absolute form.
    Directory(PathBuf),
    /// Exists but is a file or other non-directory entry.
    NotADirectory(PathBuf),
    /// Does not exist, or the input was empty/unparseable.
    NotFound,
}

/// Stateless resolver over a file-system provider. The provider is queried
/// fresh on every call; nothing is cached between navigations.
pub struct PathResolver<P> {
    provider: P,
}

impl<P: FileSystemProvider> PathResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve address-bar input. Relative paths resolve against the
    /// process working directory; a leading `~` expands to the home
    /// directory.
    pub fn resolve(&self, input: &str) -> ResolvedPath {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ResolvedPath::NotFound;
        }
        self.resolve_path(&expand_home(trimmed))
    }

    /// Resolve a candidate already in path form (tree clicks, list entries,
    /// the go-up target).
    pub fn resolve_path(&self, candidate: &Path) -> ResolvedPath {
        if !self.provider.exists(candidate) {
            return ResolvedPath::NotFound;
        }
        let canonical = match self.provider.canonical(candidate) {
            Some(path) => path,
            None => return ResolvedPath::NotFound,
        };
        if self.provider.is_directory(&canonical) {
            ResolvedPath::Directory(canonical)
        } else {
            ResolvedPath::NotADirectory(canonical)
        }
    }
}

/// Expand a leading `~` or `~/...` to the user home directory. Input that
/// does not start with a tilde (or a user-qualified `~name`) is untouched.
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') {
            if let Some(dirs) = directories::UserDirs::new() {
                return dirs.home_dir().join(rest.trim_start_matches(['/', '\\']));
            }
        }
    }
    PathBuf::from(input)
}
