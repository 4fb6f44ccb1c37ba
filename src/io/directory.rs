use crate::entry::FileEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Read one directory into sorted entries: directories first, then
/// case-insensitive by name. Dotfiles are skipped unless `show_hidden`.
pub fn read_directory(path: &Path, show_hidden: bool) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    let read_dir = fs::read_dir(path)?;

    for entry in read_dir.flatten() {
        let path = entry.path();
        if !show_hidden {
            if let Some(name) = path.file_name() {
                if name.to_string_lossy().starts_with('.') {
                    continue;
                }
            }
        }
        if let Some(file_entry) = FileEntry::from_path(path) {
            entries.push(file_entry);
        }
    }
    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
    Ok(entries)
}

/// Child directories only, for the tree pane. An unreadable directory
/// shows as empty rather than failing the frame.
pub fn read_subdirectories(path: &Path, show_hidden: bool) -> Vec<FileEntry> {
    read_directory(path, show_hidden)
        .map(|entries| entries.into_iter().filter(|e| e.is_dir).collect())
        .unwrap_or_default()
}
