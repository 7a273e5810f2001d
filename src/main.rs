use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rent_explorer::cli::Session;
use rent_explorer::config::ExplorerConfig;

/// Explore rental listings: min/avg/max rent by location and property type.
#[derive(Debug, Parser)]
#[command(name = "rent-explorer", version, about)]
struct Cli {
    /// CSV file to load (id, location, property type, price). Defaults to the built-in sample.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// The CSV file has no header row.
    #[arg(long)]
    no_headers: bool,

    /// Copyright line printed under every report.
    #[arg(long, value_name = "TEXT")]
    copyright: Option<String>,

    /// Report header, at most 30 characters.
    #[arg(long, value_name = "TEXT")]
    header: Option<String>,

    /// Home currency code (e.g. USD); asked interactively when omitted.
    #[arg(long, value_name = "CODE")]
    home_currency: Option<String>,

    /// Append ingestion events to this file as JSON lines.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply(self, mut config: ExplorerConfig) -> ExplorerConfig {
        if let Some(path) = self.data {
            config.data_path = Some(path);
        }
        if self.no_headers {
            config.has_headers = false;
        }
        if let Some(copyright) = self.copyright {
            config.copyright = copyright;
        }
        if let Some(header) = self.header {
            config.header = header;
        }
        if let Some(code) = self.home_currency {
            config.home_currency = Some(code.trim().to_ascii_uppercase());
        }
        if let Some(path) = self.log_file {
            config.log_file = Some(path);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().apply(ExplorerConfig::from_env());
    log::debug!("starting with {config:?}");

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());
    session.run().context("interactive session failed")?;
    Ok(())
}
