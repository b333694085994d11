//! List tags use case

use crate::domain::extract_hashtags;
use std::collections::BTreeSet;

/// Unique hashtags (without the leading `#`) that clearing would remove, sorted.
pub fn list_hashtags(text: &str) -> Vec<String> {
    let tags: BTreeSet<String> = extract_hashtags(text)
        .into_iter()
        .map(|tag| tag.trim_start_matches('#').to_string())
        .collect();

    tags.into_iter().collect()
}
