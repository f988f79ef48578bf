//! f5ops - F5 BIG-IP/BIG-IQ administration CLI.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    f5ops_cli::run().await
}
