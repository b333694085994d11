//! Domain layer - Text transforms over note content

pub mod hashtags;

pub use hashtags::{extract_hashtags, strip_hashtags, strip_hashtags_with_report, StripResult};
