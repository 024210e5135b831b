//! Pagination link discovery

use super::selectors;
use crate::normalize::clean_url_with_base;
use scraper::Html;

/// Yields the links to every listing page other than the one displayed
///
/// Links whose class contains `active` are skipped. Each `href` is
/// rewritten against `base_path`; links without an `href` come out empty.
/// The sequence may contain duplicates and borrows the document, so a
/// caller that needs the links after the page is dropped should collect it.
pub fn discover_pages<'a>(document: &'a Html, base_path: &'a str) -> impl Iterator<Item = String> + 'a {
    document
        .select(&selectors::PAGE_LINK)
        .filter(|link| {
            !link
                .value()
                .attr("class")
                .unwrap_or_default()
                .contains(selectors::ACTIVE_CLASS)
        })
        .map(move |link| clean_url_with_base(link.value().attr("href").unwrap_or_default(), base_path))
}
