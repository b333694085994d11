//! detag - Hashtag stripping for note content
//!
//! Removes standalone hashtags from notes while leaving fenced code blocks
//! untouched, and runs the "clear tags" action against a note host.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::strip_hashtags;
pub use error::DetagError;
