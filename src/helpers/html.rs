//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Build a stable element id from free text and a position
///
/// # Examples
/// ```ignore
/// element_id("Rippled 2.0 Released!", 3) // -> "rippled-2-0-released-3"
/// ```
pub fn element_id(text: &str, index: usize) -> String {
    let slug = slug::slugify(text);
    if slug.is_empty() {
        format!("item-{}", index)
    } else {
        format!("{}-{}", slug, index)
    }
}
