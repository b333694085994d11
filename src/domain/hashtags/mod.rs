//! Hashtag system

mod fence;
pub mod strip;

// Re-export main types
pub use strip::{extract_hashtags, strip_hashtags, strip_hashtags_with_report, StripResult};
