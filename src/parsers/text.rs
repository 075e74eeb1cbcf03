use scraper::ElementRef;

/// Elements whose text never counts as readable content
const SKIPPED_PARENTS: [&str; 3] = ["script", "style", "noscript"];

/// Collects every descendant text node of `element`, trimmed, dropping
/// pieces that are empty after trimming.
pub fn text_pieces<'a>(element: ElementRef<'a>) -> Vec<&'a str> {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let parent_skipped = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|el| el.name()))
                .is_some_and(|name| SKIPPED_PARENTS.contains(&name));
            if parent_skipped {
                return None;
            }
            let trimmed = text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        })
        .collect()
}

/// Joins the trimmed text pieces of `element` with `separator`
pub fn joined_text(element: ElementRef<'_>, separator: &str) -> String {
    text_pieces(element).join(separator)
}
