//! Error types for detag

use thiserror::Error;

/// Main error type for detag
#[derive(Debug, Error)]
pub enum DetagError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Host error: {0}")]
    Host(String),
}

impl DetagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DetagError::Config(_) | DetagError::TomlDeserialize(_) => 2,
            DetagError::InvalidNoteId(_) => 3,
            DetagError::NotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DetagError::NotFound(what) => {
                format!(
                    "Note not found: {}\n\n\
                    Suggestions:\n\
                    • Note ids are paths relative to the store root (e.g., inbox/today.md)\n\
                    • Pass --root or set DETAG_ROOT to point at your notes\n\
                    • Use 'detag clear --all' to process every note",
                    what
                )
            }
            DetagError::InvalidNoteId(id) => {
                format!(
                    "Invalid note id: '{}'\n\n\
                    Note ids must be relative paths inside the store root.\n\
                    Absolute paths and '..' components are not allowed.",
                    id
                )
            }
            DetagError::Config(msg) => {
                if msg.contains("locale") {
                    format!(
                        "{}\n\n\
                        Supported locales: en, zh\n\
                        Example: DETAG_LOCALE=zh detag clear notes/today.md",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            DetagError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse .detag.toml: {}\n\n\
                    Valid keys: locale, extensions, recursive",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DetagError
pub type Result<T> = std::result::Result<T, DetagError>;
