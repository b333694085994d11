//! Application layer - Use cases and orchestration

pub mod clear_tags;
pub mod list_tags;

pub use clear_tags::{ClearTagsOutcome, ClearTagsReport, ClearTagsService, ClearTagsSummary};
pub use list_tags::list_hashtags;
