pub mod client;
pub mod dates;
pub mod detail;
pub mod directory;
pub mod error;
pub mod html;

pub use client::BrochureClient;
pub use dates::normalize_date;
pub use detail::{extract_brochure, extract_brochure_at, Extraction};
pub use directory::extract_shop_list;
pub use error::ScraperError;
pub use html::{HtmlDocument, HtmlElement};
