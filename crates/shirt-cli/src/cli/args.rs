//! Command-line argument definitions using clap.

use crate::output::OutputMode;
use clap::Parser;

/// Shodan Host Information Retrieval Tool (S.H.I.R.T.)
///
/// Looks up one or more hosts on Shodan and writes the raw JSON records
/// to disk.
///
/// Get your API key at: https://account.shodan.io
#[derive(Parser, Debug)]
#[command(name = "shirt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shodan API key (or set SHODAN_API_KEY env var)
    #[arg(short = 'k', long, env = "SHODAN_API_KEY")]
    pub key: Option<String>,

    /// Single domain target
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// Single IP target
    #[arg(short = 'i', long)]
    pub ip: Option<String>,

    /// File containing a list of hosts (FQDN and/or IP), one per line
    #[arg(short = 'l', long)]
    pub list: Option<String>,

    /// Output mode
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputMode>,

    /// Output file name prefix
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,
}
