//! Rendering of fetched pages and search results into display text.

use crate::jina::SearchResultItem;

/// Render search results as numbered markdown blocks.
///
/// Takes at most `limit` items (the caller clamps the limit to 1-10) and
/// keeps the order the search endpoint returned. Empty fields render as
/// `N/A`; content is never truncated.
pub fn format_search_results(items: &[SearchResultItem], limit: usize) -> String {
    if items.is_empty() {
        return "No search results found.".to_string();
    }

    let mut parts = Vec::new();
    for (idx, item) in items.iter().take(limit).enumerate() {
        parts.push(format!("### Result {}\n", idx + 1));
        parts.push(format!("URL: {}\n", or_na(&item.url)));
        parts.push(format!("Title: {}\n", or_na(&item.title)));
        parts.push(format!("Content:\n{}\n", or_na(&item.content)));
        parts.push("---\n".to_string());
    }

    parts.join("\n")
}

/// Render a single fetched page, prefixing a `# title` heading only when a
/// title is present.
pub fn format_page(title: &str, content: &str) -> String {
    if title.is_empty() {
        content.to_string()
    } else {
        format!("# {title}\n\n{content}")
    }
}

fn or_na(field: &str) -> &str {
    if field.is_empty() {
        "N/A"
    } else {
        field
    }
}
