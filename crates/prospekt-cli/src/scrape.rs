//! Scrape run orchestration.
//!
//! The directory page is the only hard dependency of a run: failing to fetch
//! or parse it aborts without writing anything. Shop pages are processed one
//! at a time and a failing shop is reported and skipped.

use std::path::{Path, PathBuf};

use chrono::Local;
use prospekt_core::{AppConfig, BrochureRecord, ShopRef};
use prospekt_scraper::{extract_brochure, extract_shop_list, BrochureClient, Extraction, ScraperError};
use thiserror::Error;

use crate::output::{output_filename, write_brochures};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors that end a run before the output file is written.
#[derive(Debug, Error)]
pub(crate) enum RunError {
    #[error("failed to fetch directory page {url}: {source}")]
    DirectoryFetch {
        url: String,
        #[source]
        source: ScraperError,
    },

    #[error("failed to parse directory page: {0}")]
    DirectoryParse(#[source] ScraperError),

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// One-line message shown on the console when the run aborts.
    pub(crate) fn console_message(&self) -> &'static str {
        match self {
            RunError::DirectoryFetch { .. } => "Error fetching the main page.",
            RunError::DirectoryParse(_) => "Error parsing HTML.",
            RunError::WriteOutput { .. } => "Error writing the output file.",
        }
    }
}

/// What a completed run produced.
#[derive(Debug)]
pub(crate) struct RunSummary {
    pub loaded: usize,
    pub total: usize,
    pub output_path: PathBuf,
    pub completed_at: String,
}

/// Fetches and parses the directory page.
async fn load_directory(
    config: &AppConfig,
    client: &BrochureClient,
) -> Result<Vec<ShopRef>, RunError> {
    let url = config.directory_url();
    let html = client
        .fetch_html(&url)
        .await
        .map_err(|source| RunError::DirectoryFetch { url, source })?;
    extract_shop_list(&html).map_err(RunError::DirectoryParse)
}

/// Per-shop result of a run.
enum ShopOutcome {
    Loaded(BrochureRecord),
    FetchFailed(ScraperError),
    NotFound,
}

/// Fetches one shop page and extracts its main brochure.
async fn scrape_shop(config: &AppConfig, client: &BrochureClient, shop: &ShopRef) -> ShopOutcome {
    let html = match client.fetch_html(&config.shop_url(&shop.url)).await {
        Ok(html) => html,
        Err(e) => return ShopOutcome::FetchFailed(e),
    };
    match extract_brochure(&html, &shop.shop_name) {
        Ok(Extraction::Found(record)) => ShopOutcome::Loaded(record),
        Ok(Extraction::NotFound) => ShopOutcome::NotFound,
        Err(e) => {
            tracing::error!(shop = %shop.shop_name, error = %e, "brochure extraction failed");
            ShopOutcome::NotFound
        }
    }
}

/// Runs a full scrape and writes the dated JSON file into `output_dir`.
///
/// Each console line (per-shop status and the closing summary) is handed to
/// `emit` as it happens.
///
/// # Errors
///
/// Returns [`RunError`] if the directory page cannot be fetched or parsed,
/// or the output file cannot be written. Per-shop failures never error.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    client: &BrochureClient,
    output_dir: &Path,
    mut emit: impl FnMut(String),
) -> Result<RunSummary, RunError> {
    tracing::info!(url = %config.directory_url(), "starting brochure scrape");

    let shops = load_directory(config, client).await?;
    let total = shops.len();
    let mut brochures: Vec<BrochureRecord> = Vec::with_capacity(total);

    for (index, shop) in shops.iter().enumerate() {
        let position = index + 1;
        match scrape_shop(config, client, shop).await {
            ShopOutcome::Loaded(record) => {
                brochures.push(record);
                emit(format!("🟢 [{position} / {total}] {}", shop.shop_name));
            }
            ShopOutcome::FetchFailed(e) => {
                tracing::warn!(shop = %shop.shop_name, error = %e, "shop page fetch failed");
                emit(format!(
                    "🔴 [{position} / {total}] {} - Failed to fetch brochure page",
                    shop.shop_name
                ));
            }
            ShopOutcome::NotFound => {
                tracing::warn!(shop = %shop.shop_name, "no main brochure on shop page");
                emit(format!(
                    "🔴 [{position} / {total}] {} - Brochure data not found",
                    shop.shop_name
                ));
            }
        }
    }

    let today = Local::now().date_naive();
    let output_path =
        write_brochures(output_dir, today, &brochures).map_err(|source| RunError::WriteOutput {
            path: output_dir.join(output_filename(today)),
            source,
        })?;

    let summary = RunSummary {
        loaded: brochures.len(),
        total,
        output_path,
        completed_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
    };

    let filename = summary
        .output_path
        .file_name()
        .map_or_else(|| summary.output_path.display().to_string(), |f| {
            f.to_string_lossy().into_owned()
        });
    emit(format!(
        "[Successfully loaded data]: {}/{}",
        summary.loaded, summary.total
    ));
    emit(format!("[Data saved in]: {filename}"));
    emit(format!("[Datetime of scrape]: {}", summary.completed_at));

    tracing::info!(
        loaded = summary.loaded,
        total = summary.total,
        path = %summary.output_path.display(),
        "brochure scrape finished"
    );
    Ok(summary)
}

/// Fetches the directory page and lists the shops a run would visit,
/// without fetching any shop page or writing output.
///
/// # Errors
///
/// Returns [`RunError`] if the directory page cannot be fetched or parsed.
pub(crate) async fn list_shops(
    config: &AppConfig,
    client: &BrochureClient,
    mut emit: impl FnMut(String),
) -> Result<usize, RunError> {
    let shops = load_directory(config, client).await?;
    let total = shops.len();
    for (index, shop) in shops.iter().enumerate() {
        emit(format!(
            "[{} / {total}] {} -> {}",
            index + 1,
            shop.shop_name,
            config.shop_url(&shop.url)
        ));
    }
    Ok(total)
}

#[cfg(test)]
#[path = "scrape_test.rs"]
mod tests;
