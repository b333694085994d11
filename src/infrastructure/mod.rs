//! Infrastructure layer - Host contract, storage, configuration

pub mod config;
pub mod host;
pub mod i18n;
pub mod repository;

pub use config::Config;
pub use host::{NoteHost, NoteId, Notification, NotificationLevel};
pub use i18n::{Locale, Messages};
pub use repository::FileSystemNoteStore;
