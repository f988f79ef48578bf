//! `f5ops inventory` - Export a BIG-IQ device list as an Ansible inventory.

use anyhow::{Context as _, Result};
use chrono::Utc;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::InventoryArgs;
use crate::output::OutputFormat;
use crate::prompt;
use f5ops::inventory;

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Hostname")]
    hostname: String,
    #[tabled(rename = "Management Address")]
    management_address: String,
}

pub async fn execute(ctx: Context, args: InventoryArgs) -> Result<()> {
    let host = ctx.resolve_bigiq(args.bigiq)?;
    let user = ctx.resolve_user(args.user)?;
    let password = prompt::password(&user)?;

    println!(
        "{}",
        format!("---  Importing BIG-IQ device list from {host}  ---").bold()
    );

    let client = ctx.client(&host, &user, &password)?;
    let devices = client
        .devices()
        .list()
        .await
        .with_context(|| format!("device list request to {host} failed"))?;

    // Render the whole file first, then write once. The destination is
    // never touched before a successful response has been parsed.
    let text = inventory::render(&devices.items, &host, &args.group, Utc::now());
    std::fs::write(&args.destfile, text)
        .with_context(|| format!("failed to write {}", args.destfile.display()))?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&devices)?);
        }
        OutputFormat::Pretty => {
            if devices.is_empty() {
                println!("{}", "No devices in the group.".yellow());
            } else {
                let rows: Vec<DeviceRow> = devices
                    .items
                    .iter()
                    .map(|d| DeviceRow {
                        hostname: d.hostname.clone(),
                        management_address: d.management_address.clone(),
                    })
                    .collect();

                let table = Table::new(&rows).with(Style::rounded()).to_string();
                println!("{table}");
            }
        }
    }

    println!(
        "{} {} devices -> {}",
        "Wrote".green().bold(),
        devices.len(),
        args.destfile.display()
    );

    Ok(())
}
