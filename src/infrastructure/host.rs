//! Host platform contract
//!
//! The host owns note storage and user-facing notifications. Services get a
//! host handle at construction time.

use crate::error::Result;
use std::fmt;

/// Identifier of a note as understood by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        NoteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        NoteId::new(id)
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        NoteId(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A message shown to the user by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Note access and notification surface of the host platform
pub trait NoteHost {
    /// Current content of a note; `None` when the note is absent or empty
    fn fetch_note(&self, id: &NoteId) -> Result<Option<String>>;

    /// Persist new tags and content for a note
    fn update_note(&self, id: &NoteId, tags: &[String], content: &str) -> Result<()>;

    /// Ask the host to reload its views after an update
    fn refresh(&self) -> Result<()> {
        Ok(())
    }

    /// Show a notification to the user
    fn notify(&self, notification: &Notification);
}

impl<T: NoteHost + ?Sized> NoteHost for &T {
    fn fetch_note(&self, id: &NoteId) -> Result<Option<String>> {
        (**self).fetch_note(id)
    }

    fn update_note(&self, id: &NoteId, tags: &[String], content: &str) -> Result<()> {
        (**self).update_note(id, tags, content)
    }

    fn refresh(&self) -> Result<()> {
        (**self).refresh()
    }

    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}
