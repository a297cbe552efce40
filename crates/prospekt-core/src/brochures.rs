use serde::{Deserialize, Serialize};

/// A retailer listed on the directory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRef {
    /// Visible anchor text, trimmed. Never empty.
    pub shop_name: String,
    /// Site-relative link target exactly as it appears in the `href`.
    pub url: String,
}

/// Metadata of a retailer's currently featured brochure.
///
/// Field order here is the field order of the written JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrochureRecord {
    pub title: String,
    /// Image URL as found in the markup; may be relative.
    pub thumbnail: Option<String>,
    pub shop_name: String,
    /// `"YYYY-MM-DD"` when the page text was a `DD.MM.YYYY` date, otherwise
    /// the page text verbatim.
    pub valid_from: Option<String>,
    /// Same rule as [`BrochureRecord::valid_from`].
    pub valid_to: Option<String>,
    /// Local wall-clock time of extraction, `"YYYY-MM-DD HH:MM:SS"`.
    pub parsed_time: String,
}
