//! Output formatting utilities

use crate::application::ClearTagsSummary;

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }

    output
}

/// Format the result of clearing several notes.
pub fn format_clear_summary(summary: &ClearTagsSummary) -> String {
    let mut output = if summary.dry_run {
        format!(
            "Dry run: {} note(s) would be cleared of {} tag(s).",
            summary.cleared, summary.removed_tags
        )
    } else {
        format!(
            "Cleared {} tag(s) from {} note(s).",
            summary.removed_tags, summary.cleared
        )
    };

    if !summary.is_success() {
        output.push_str(&format!(
            "\n{} note(s) unavailable, {} update(s) failed.",
            summary.unavailable, summary.failed
        ));
    }

    output
}
