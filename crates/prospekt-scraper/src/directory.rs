//! Retailer directory page extraction.

use prospekt_core::ShopRef;

use crate::error::ScraperError;
use crate::html::HtmlDocument;

/// `id` of the `<ul>` that lists every retailer on the directory page.
pub const SHOP_LIST_ID: &str = "left-category-shops";

/// Extracts the retailer list from the directory page.
///
/// Every `<li>` inside the list container is inspected and its first `<a>`
/// supplies the trimmed name and raw `href`. Items missing either are
/// skipped. Document order is preserved.
///
/// An empty `Vec` means the container exists but lists no usable shops.
///
/// # Errors
///
/// Returns [`ScraperError::ShopListMissing`] if the page has no
/// `ul#left-category-shops`.
pub fn extract_shop_list(html: &str) -> Result<Vec<ShopRef>, ScraperError> {
    let document = HtmlDocument::parse(html);
    let Some(list) = document.find_by_id("ul", SHOP_LIST_ID)? else {
        return Err(ScraperError::ShopListMissing {
            id: SHOP_LIST_ID.to_owned(),
        });
    };

    let mut shops = Vec::new();
    for item in list.descendants("li")? {
        let Some(anchor) = item.first_descendant("a")? else {
            continue;
        };

        let shop_name = anchor.text().trim().to_owned();
        let url = anchor.attr("href").unwrap_or_default();
        if shop_name.is_empty() || url.is_empty() {
            tracing::debug!(shop_name = %shop_name, url, "skipping directory entry without name or link");
            continue;
        }

        shops.push(ShopRef {
            shop_name,
            url: url.to_owned(),
        });
    }

    Ok(shops)
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
