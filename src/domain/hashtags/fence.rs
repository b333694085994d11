//! Fenced code block protection.
//!
//! Code blocks are swapped out for placeholders before hashtag removal and
//! swapped back afterwards, so nothing between a pair of fences is touched.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

/// Triple-backtick fence to the next triple-backtick fence, across lines.
fn fence_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)```.*?```").unwrap())
}

/// Placeholder for the block at `index`.
///
/// The `#` is preceded by a non-whitespace character, so the placeholder can
/// never be a hashtag, and a hashtag run touching either side of it never
/// ends on a boundary.
fn placeholder(index: usize) -> String {
    format!("{}#fence-{}{}", PLACEHOLDER_OPEN, index, PLACEHOLDER_CLOSE)
}

/// Code blocks lifted out of a document, in document order.
#[derive(Debug, Default)]
pub(crate) struct CodeBlocks {
    blocks: Vec<String>,
}

impl CodeBlocks {
    /// Replace every fenced block in `text` with a placeholder.
    ///
    /// Unterminated fences are left in place as plain text.
    pub(crate) fn extract(text: &str) -> (String, CodeBlocks) {
        let mut blocks = Vec::new();
        let protected = fence_regex()
            .replace_all(text, |captures: &Captures<'_>| {
                let marker = placeholder(blocks.len());
                blocks.push(captures[0].to_string());
                marker
            })
            .into_owned();

        (protected, CodeBlocks { blocks })
    }

    /// Put each block back in place of the first occurrence of its placeholder.
    ///
    /// Note text that already contains a placeholder sequence can capture a
    /// block meant for a later position.
    pub(crate) fn restore(&self, text: String) -> String {
        self.blocks
            .iter()
            .enumerate()
            .fold(text, |acc, (index, block)| {
                acc.replacen(&placeholder(index), block, 1)
            })
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }
}
