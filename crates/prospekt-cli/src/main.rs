mod output;
mod scrape;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prospekt-cli")]
#[command(about = "Collects the current main brochure of every listed retailer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape all retailers and write the dated JSON file (default).
    Scrape {
        /// Directory the JSON file is written into.
        #[arg(long, env = "PROSPEKT_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Only list the retailers found on the directory page.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = prospekt_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let dry_run = match cli.command {
        Some(Commands::Scrape {
            output_dir,
            dry_run,
        }) => {
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            dry_run
        }
        None => false,
    };

    let client = prospekt_scraper::BrochureClient::new(config.request_timeout_secs)?;
    let print = |line: String| println!("{line}");

    let result = if dry_run {
        scrape::list_shops(&config, &client, print).await.map(|_| ())
    } else {
        scrape::run_scrape(&config, &client, &config.output_dir, print)
            .await
            .map(|_| ())
    };

    // A failed run is reported on the console; the process still exits normally.
    if let Err(e) = result {
        tracing::error!(error = %e, "scrape run aborted");
        println!("{}", e.console_message());
    }

    Ok(())
}
