//! shirt - Shodan Host Information Retrieval Tool
//!
//! Looks up hosts on Shodan and dumps the raw JSON records to disk.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    shirt_cli::run().await
}
