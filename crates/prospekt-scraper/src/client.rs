//! HTTP client for the brochure site's HTML pages.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Plain GET client for directory and shop pages.
///
/// Sends no custom headers and never retries: a failed fetch is reported to
/// the caller, which decides whether the run can continue.
pub struct BrochureClient {
    client: Client,
}

impl BrochureClient {
    /// Creates a `BrochureClient`. With `timeout_secs = None` the transport
    /// default applies.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, ScraperError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] — network or TLS failure, or unreadable body.
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScraperError::EmptyBody`] — 2xx response with an empty body.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "fetching page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(ScraperError::EmptyBody {
                url: url.to_owned(),
            });
        }
        Ok(body)
    }
}
