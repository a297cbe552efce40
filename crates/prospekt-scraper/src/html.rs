//! Narrow query facade over a parsed HTML document.
//!
//! The extractors only need a handful of lookups: an element by id, an
//! element by attribute value, descendants by tag name, visible text and
//! attribute values. Everything parser-specific stays in this module.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;

/// A parsed HTML page.
pub struct HtmlDocument {
    html: Html,
}

/// An element inside an [`HtmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a> {
    element: ElementRef<'a>,
}

impl HtmlDocument {
    /// Parses `raw` leniently; malformed markup never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// First `tag` element whose `id` equals `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if `tag` or `id` cannot form
    /// a valid CSS selector.
    pub fn find_by_id(&self, tag: &str, id: &str) -> Result<Option<HtmlElement<'_>>, ScraperError> {
        self.find_by_attr(tag, "id", id)
    }

    /// First `tag` element whose attribute `name` equals `value` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if the arguments cannot form
    /// a valid CSS selector.
    pub fn find_by_attr(
        &self,
        tag: &str,
        name: &str,
        value: &str,
    ) -> Result<Option<HtmlElement<'_>>, ScraperError> {
        let selector = compile(&format!("{tag}[{name}=\"{value}\"]"))?;
        Ok(self
            .html
            .select(&selector)
            .next()
            .map(|element| HtmlElement { element }))
    }
}

impl<'a> HtmlElement<'a> {
    /// All `tag` descendants in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if `tag` is not a valid selector.
    pub fn descendants(&self, tag: &str) -> Result<Vec<HtmlElement<'a>>, ScraperError> {
        let selector = compile(tag)?;
        Ok(self
            .element
            .select(&selector)
            .map(|element| HtmlElement { element })
            .collect())
    }

    /// First `tag` descendant in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if `tag` is not a valid selector.
    pub fn first_descendant(&self, tag: &str) -> Result<Option<HtmlElement<'a>>, ScraperError> {
        let selector = compile(tag)?;
        Ok(self
            .element
            .select(&selector)
            .next()
            .map(|element| HtmlElement { element }))
    }

    /// Concatenated text of the element and all its descendants, untrimmed.
    #[must_use]
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}

fn compile(selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|e| ScraperError::InvalidSelector {
        selector: selector.to_owned(),
        reason: e.to_string(),
    })
}
