use crate::filter::LinkFilter;
use crate::parsers::{ArticleParts, ContentSelectors, text};
use crate::results::NO_TITLE;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Extracts the unique FAQ links of a rendered listing page, in first-seen order
pub fn parse_links(html: &str, filter: &LinkFilter) -> Vec<String> {
    let doc = Html::parse_document(html);

    let mut seen = HashSet::new();
    let links = doc
        .select(&ANCHOR_SELECTOR)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| filter.accept(href))
        .filter(|url| seen.insert(url.clone()))
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} FAQ links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    links
}

/// Extracts title and body text of a rendered article page
pub fn parse_article(html: &str, selectors: &ContentSelectors) -> ArticleParts {
    let doc = Html::parse_document(html);

    ArticleParts {
        title: extract_title(&doc, selectors),
        content: extract_content(&doc, selectors),
    }
}

/// Text of the first `h1` with each piece trimmed, or [`NO_TITLE`]
pub fn extract_title(doc: &Html, selectors: &ContentSelectors) -> String {
    match doc.select(&selectors.title).next() {
        Some(heading) => text::joined_text(heading, ""),
        None => NO_TITLE.to_string(),
    }
}

/// Newline-joined text of the first container in the cascade that exists
pub fn extract_content(doc: &Html, selectors: &ContentSelectors) -> String {
    for (rank, selector) in selectors.body.iter().enumerate() {
        if let Some(container) = doc.select(selector).next() {
            if rank > 0 {
                ::log::debug!("Primary content container missing, fell back to rank {}", rank);
            }
            return text::joined_text(container, "\n");
        }
    }

    ::log::debug!("No content container matched");
    String::new()
}
