use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// One row of a directory listing.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: SystemTime,
    pub extension: String,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let is_symlink = symlink_meta.is_symlink();

        let name = path.file_name()?.to_string_lossy().to_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.modified().ok())
            .unwrap_or(SystemTime::now());

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink,
            size,
            modified,
            extension,
        })
    }

    pub fn get_icon(&self) -> &str {
        if self.is_dir {
            return "\u{1f4c1}";
        }
        match self.extension.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => "\u{1f5bc}",
            "mp4" | "mkv" | "mov" | "avi" | "webm" => "\u{1f3ac}",
            "mp3" | "wav" | "flac" | "ogg" | "m4a" => "\u{1f3b5}",
            "zip" | "tar" | "gz" | "7z" | "rar" | "xz" | "bz2" => "\u{1f4e6}",
            "exe" | "msi" | "sh" | "bash" | "zsh" | "bat" | "cmd" => "\u{2699}",
            "lock" => "\u{1f512}",
            _ => "\u{1f4c4}",
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }
}
