//! Sequential per-target processing.

use anyhow::Result;
use colored::Colorize;
use serde_json::Value;
use shirt_client::ShodanClient;
use shirt_core::Target;

use crate::output::{self, OutputMode};

/// Fetch one target and apply the output policy.
///
/// API-level failures are reported on stdout and swallowed so the run
/// continues with the next target; file-write failures propagate and
/// abort the run.
pub async fn process_host(
    client: &ShodanClient,
    entry: &str,
    mode: OutputMode,
    prefix: &str,
    all_hosts: &mut Vec<Value>,
) -> Result<()> {
    let record = match fetch(client, entry).await {
        Ok(record) => record,
        Err(e) => {
            println!("{} {entry}: {e}", "Error with".red());
            return Ok(());
        }
    };

    if mode.writes_single() {
        output::write_host(prefix, entry, &record)?;
    }

    if mode.writes_combined() {
        all_hosts.push(record);
    }

    Ok(())
}

/// IP literals get a direct host lookup; everything else goes through a
/// `hostname:` search.
async fn fetch(client: &ShodanClient, entry: &str) -> shirt_core::Result<Value> {
    match Target::classify(entry) {
        Target::Ip(ip) => client.search().host(&ip).await,
        Target::Hostname(name) => client.search().query(&format!("hostname:{name}")).await,
    }
}
