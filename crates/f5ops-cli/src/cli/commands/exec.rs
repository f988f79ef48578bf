//! `f5ops exec` - Run a single bash/tmsh command on a BIG-IP.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::ExecArgs;
use crate::output::OutputFormat;
use crate::prompt;

pub async fn execute(ctx: Context, args: ExecArgs) -> Result<()> {
    let host = ctx.resolve_bigip(args.bigip)?;
    let user = ctx.resolve_user(args.user)?;
    let cmd = match args.cmd {
        Some(cmd) => cmd,
        None => prompt::command()?,
    };
    let password = prompt::password(&user)?;

    let client = ctx.client(&host, &user, &password)?;
    let result = client.util().bash(&cmd).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Pretty => {
            if ctx.verbose {
                println!("{} {} @ {}", "Executed:".bold(), cmd.cyan(), host);
            }
            print!("{}", result.output());
        }
    }

    Ok(())
}
