use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Domain prefix every page URL is built from, e.g. `"https://www.prospektmaschine.de/"`.
    pub base_url: String,
    /// Path segment of the retailer directory page, appended to `base_url`.
    pub directory_path: String,
    pub output_dir: PathBuf,
    /// `None` keeps the HTTP transport's default.
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
}

impl AppConfig {
    /// Absolute URL of the retailer directory page.
    #[must_use]
    pub fn directory_url(&self) -> String {
        format!("{}{}", self.base_url, self.directory_path)
    }

    /// Absolute URL of a shop page. The relative URL is appended verbatim;
    /// duplicate slashes are not collapsed.
    #[must_use]
    pub fn shop_url(&self, relative_url: &str) -> String {
        format!("{}{relative_url}", self.base_url)
    }
}
