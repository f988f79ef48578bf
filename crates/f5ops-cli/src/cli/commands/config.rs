//! `f5ops config` - Manage CLI configuration.

use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show(&ctx.config),
        ConfigCommands::Set { key, value } => set(ctx.config.clone(), &key, &value),
        ConfigCommands::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
    }
}

fn show(config: &Config) -> Result<()> {
    println!("{}", "Current configuration:".bold());
    println!("  bigiq:         {}", display(config.bigiq.as_deref()));
    println!("  bigip:         {}", display(config.bigip.as_deref()));
    println!("  user:          {}", display(config.user.as_deref()));
    println!("  insecure:      {}", config.insecure);
    println!(
        "  output_format: {}",
        config
            .output_format
            .map_or_else(|| "(not set)".to_string(), |f| f.to_string())
    );
    Ok(())
}

fn display(value: Option<&str>) -> String {
    value.map_or_else(|| "(not set)".dimmed().to_string(), ToString::to_string)
}

fn set(mut config: Config, key: &str, value: &str) -> Result<()> {
    match key {
        "bigiq" => config.bigiq = Some(value.to_string()),
        "bigip" => config.bigip = Some(value.to_string()),
        "user" => config.user = Some(value.to_string()),
        "insecure" => {
            config.insecure = value
                .parse()
                .map_err(|_| anyhow::anyhow!("insecure must be true or false"))?;
        }
        "output_format" => config.output_format = Some(OutputFormat::from_str(value)?),
        _ => anyhow::bail!(
            "Unknown config key: {key}\n\
             Valid keys: bigiq, bigip, user, insecure, output_format"
        ),
    }

    config.save()?;
    println!("{} {key} = {value}", "Set".green().bold());
    Ok(())
}
