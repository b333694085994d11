//! Hashtag removal outside fenced code blocks.

use super::fence::CodeBlocks;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// `#` followed by a run of characters that are neither whitespace nor `#`.
///
/// Boundaries are checked separately in [`is_standalone`] since the regex
/// crate has no lookaround.
fn candidate_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#[^\s#]+").unwrap())
}

/// Result of stripping hashtags from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripResult {
    pub content: String,
    /// Removed tokens in document order, with their leading `#`.
    pub removed: Vec<String>,
}

impl StripResult {
    pub fn changed(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// A candidate is a hashtag when it starts at the beginning of the text or
/// after whitespace (and not right after `://`), and ends at the end of the
/// text or before whitespace.
fn is_standalone(text: &str, span: &Range<usize>) -> bool {
    let before = &text[..span.start];
    let after = &text[span.end..];

    let opens = before.chars().next_back().is_none_or(char::is_whitespace)
        && !before.ends_with("://");
    let closes = after.chars().next().is_none_or(char::is_whitespace);

    opens && closes
}

fn hashtag_spans(text: &str) -> Vec<Range<usize>> {
    candidate_regex()
        .find_iter(text)
        .map(|m| m.range())
        .filter(|span| is_standalone(text, span))
        .collect()
}

/// Remove standalone hashtags, leaving fenced code blocks untouched.
///
/// Tokens are deleted outright; the whitespace around them stays, so
/// `"hello #tag world"` becomes `"hello  world"`.
pub fn strip_hashtags(text: &str) -> String {
    strip_hashtags_with_report(text).content
}

/// Like [`strip_hashtags`], also returning the removed tokens.
pub fn strip_hashtags_with_report(text: &str) -> StripResult {
    if text.is_empty() {
        return StripResult {
            content: String::new(),
            removed: Vec::new(),
        };
    }

    let (protected, blocks) = CodeBlocks::extract(text);
    tracing::trace!(code_blocks = blocks.len(), "protected fenced code blocks");

    let mut removed = Vec::new();
    let mut stripped = String::with_capacity(protected.len());
    let mut cursor = 0usize;

    for span in hashtag_spans(&protected) {
        stripped.push_str(&protected[cursor..span.start]);
        removed.push(protected[span.clone()].to_string());
        cursor = span.end;
    }
    stripped.push_str(&protected[cursor..]);

    StripResult {
        content: blocks.restore(stripped),
        removed,
    }
}

/// Hashtags that [`strip_hashtags`] would remove, in document order.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let (protected, _) = CodeBlocks::extract(text);
    hashtag_spans(&protected)
        .into_iter()
        .map(|span| protected[span].to_string())
        .collect()
}
