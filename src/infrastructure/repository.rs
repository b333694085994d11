//! File system note store

use crate::error::{DetagError, Result};
use crate::infrastructure::host::{NoteHost, NoteId, Notification, NotificationLevel};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Notes stored as files under a root directory.
///
/// Note ids are paths relative to the root, with `/` separators.
#[derive(Debug, Clone)]
pub struct FileSystemNoteStore {
    pub root: PathBuf,
    extensions: Vec<String>,
}

impl FileSystemNoteStore {
    /// Create a store over `root` that treats files with `extensions` as notes
    pub fn new(root: PathBuf, extensions: Vec<String>) -> Self {
        FileSystemNoteStore { root, extensions }
    }

    pub fn from_config(root: PathBuf, config: &Config) -> Self {
        Self::new(root, config.extensions.clone())
    }

    /// Locate the store root: DETAG_ROOT if set, otherwise the current directory
    pub fn discover_root() -> Result<PathBuf> {
        if let Ok(root_path) = std::env::var("DETAG_ROOT") {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                return Ok(path);
            } else {
                return Err(DetagError::Config(format!(
                    "DETAG_ROOT is set to '{}' but it is not a directory.",
                    path.display()
                )));
            }
        }

        Ok(std::env::current_dir()?)
    }

    /// Map a note id to a path inside the root, rejecting anything that escapes it
    fn resolve(&self, id: &NoteId) -> Result<PathBuf> {
        let relative = Path::new(id.as_str());

        let is_plain_relative = !id.as_str().is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

        if !is_plain_relative {
            return Err(DetagError::InvalidNoteId(id.to_string()));
        }

        Ok(self.root.join(relative))
    }

    fn is_note_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn note_id_from_relative_path(path: &Path) -> Option<NoteId> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(NoteId::new(parts.join("/")))
    }

    /// List note files, sorted by id. Dot-directories are skipped when recursing.
    pub fn list_notes(&self, recursive: bool) -> Result<Vec<NoteId>> {
        if !self.root.is_dir() {
            return Err(DetagError::NotFound(self.root.display().to_string()));
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        let mut notes = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() || !self.is_note_file(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if let Some(id) = Self::note_id_from_relative_path(rel) {
                notes.push(id);
            }
        }

        notes.sort();
        Ok(notes)
    }

    /// Write note content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_note_atomic(path: &Path, content: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.detag-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("note.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

/// Files carry their tags inline, so any tags the caller keeps go on a trailing line.
fn content_with_tags(content: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        return content.to_string();
    }

    let tag_line = tags
        .iter()
        .map(|tag| format!("#{}", tag.trim_start_matches('#')))
        .collect::<Vec<_>>()
        .join(" ");

    if content.is_empty() {
        tag_line
    } else if content.ends_with('\n') {
        format!("{}{}\n", content, tag_line)
    } else {
        format!("{}\n{}", content, tag_line)
    }
}

impl NoteHost for FileSystemNoteStore {
    fn fetch_note(&self, id: &NoteId) -> Result<Option<String>> {
        let path = self.resolve(id)?;

        if !path.is_file() {
            tracing::debug!(note = %id, "note file missing");
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    fn update_note(&self, id: &NoteId, tags: &[String], content: &str) -> Result<()> {
        let path = self.resolve(id)?;

        if !path.is_file() {
            return Err(DetagError::NotFound(id.to_string()));
        }

        Self::write_note_atomic(&path, &content_with_tags(content, tags))?;
        tracing::debug!(note = %id, bytes = content.len(), "note updated");
        Ok(())
    }

    fn notify(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Success => println!("{}", notification.message),
            NotificationLevel::Error => eprintln!("{}", notification.message),
        }
    }
}
