//! CLI argument parsing and the run orchestrator.

pub mod args;

use anyhow::Result;
use args::Cli;
use clap::Parser;

use crate::config::Config;
use crate::output;
use crate::processor::process_host;

/// Default output file name prefix
const DEFAULT_PREFIX: &str = "shirt";

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;

    // Key resolution: --key, SHODAN_API_KEY (via clap), then config file
    let api_key = cli.key.or_else(|| config.api_key.clone()).ok_or_else(|| {
        anyhow::anyhow!(
            "API key required.\n\n\
             Set it with one of:\n  \
             1. --key <KEY>\n  \
             2. SHODAN_API_KEY environment variable\n  \
             3. api_key in the config file\n\n\
             Get your key at: https://account.shodan.io"
        )
    })?;

    let mode = cli.output.or(config.output_mode).unwrap_or_default();
    let prefix = cli
        .prefix
        .or_else(|| config.prefix.clone())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

    let client = shirt_client::ShodanClient::new(api_key);
    let mut all_hosts: Vec<serde_json::Value> = Vec::new();

    // Exactly one target source, in priority order
    if let Some(domain) = &cli.domain {
        process_host(&client, domain, mode, &prefix, &mut all_hosts).await?;
    } else if let Some(ip) = &cli.ip {
        process_host(&client, ip, mode, &prefix, &mut all_hosts).await?;
    } else if let Some(list) = &cli.list {
        let path = shellexpand::tilde(list);
        let Ok(content) = std::fs::read_to_string(path.as_ref()) else {
            println!("The specified hosts file does not exist.");
            return Ok(());
        };

        // Blank lines pass through and end up as hostname searches
        for entry in content.lines() {
            process_host(&client, entry, mode, &prefix, &mut all_hosts).await?;
        }
    }

    if mode.writes_combined() {
        output::write_combined(&prefix, &all_hosts)?;
    }

    Ok(())
}
