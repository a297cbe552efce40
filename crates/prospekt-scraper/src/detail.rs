//! Main-brochure extraction from a retailer's brochure page.

use chrono::{Local, NaiveDateTime};
use prospekt_core::BrochureRecord;

use crate::dates::normalize_date;
use crate::error::ScraperError;
use crate::html::{HtmlDocument, HtmlElement};

/// Attribute name and value that flag the featured brochure container.
pub const MAIN_BROCHURE_MARKER: (&str, &str) = ("data-brochure-is-main", "1");

/// Title used when the container has no `<strong>` element.
pub const DEFAULT_TITLE: &str = "Prospekt";

const VALIDITY_SEPARATOR: &str = " - ";
const PARSED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of looking for a single item on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    Found(T),
    /// The page was readable but the flagged element is not on it.
    NotFound,
}

/// Extracts the main brochure from a shop page, stamped with the current
/// local time.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] only if a built-in query fails
/// to compile.
pub fn extract_brochure(
    html: &str,
    shop_name: &str,
) -> Result<Extraction<BrochureRecord>, ScraperError> {
    extract_brochure_at(html, shop_name, Local::now().naive_local())
}

/// Same as [`extract_brochure`] with an explicit extraction timestamp.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] only if a built-in query fails
/// to compile.
pub fn extract_brochure_at(
    html: &str,
    shop_name: &str,
    parsed_at: NaiveDateTime,
) -> Result<Extraction<BrochureRecord>, ScraperError> {
    let document = HtmlDocument::parse(html);
    let (marker_name, marker_value) = MAIN_BROCHURE_MARKER;
    let Some(container) = document.find_by_attr("div", marker_name, marker_value)? else {
        return Ok(Extraction::NotFound);
    };

    let title = container
        .first_descendant("strong")?
        .map_or_else(|| DEFAULT_TITLE.to_owned(), |strong| strong.text().trim().to_owned());

    let thumbnail = container
        .first_descendant("img")?
        .and_then(|img| thumbnail_source(&img));

    let (valid_from, valid_to) = match container.first_descendant("small")? {
        Some(small) => {
            let text = small.text();
            let (from, to) = split_validity(text.trim());
            (normalize_date(Some(from)), normalize_date(Some(to)))
        }
        None => (None, None),
    };

    Ok(Extraction::Found(BrochureRecord {
        title,
        thumbnail,
        shop_name: shop_name.to_owned(),
        valid_from,
        valid_to,
        parsed_time: parsed_at.format(PARSED_TIME_FORMAT).to_string(),
    }))
}

/// `src`, or the lazy-load `data-src` when `src` is missing or empty.
fn thumbnail_source(img: &HtmlElement<'_>) -> Option<String> {
    ["src", "data-src"]
        .into_iter()
        .filter_map(|name| img.attr(name))
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

/// First and last `" - "`-separated token. Text without a separator yields
/// the same token twice.
fn split_validity(text: &str) -> (&str, &str) {
    let mut tokens = text.split(VALIDITY_SEPARATOR);
    let first = tokens.next().unwrap_or(text);
    let last = tokens.last().unwrap_or(first);
    (first, last)
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
