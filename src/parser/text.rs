use scraper::ElementRef;

/// Concatenated text of all descendant text nodes, in document order.
pub fn full_text(el: ElementRef) -> String {
    el.text().collect::<String>()
}

/// Full text with markup whitespace flattened: lines trimmed, blank
/// lines dropped, joined with single newlines. Used for the raw-text
/// capture, where source indentation is not card content.
pub fn flatten_text(el: ElementRef) -> String {
    full_text(el)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
