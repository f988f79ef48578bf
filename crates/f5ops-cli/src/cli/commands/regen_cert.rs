//! `f5ops regen-cert` - Regenerate the local self-signed device certificate.
//!
//! Runs on the appliance itself. Every external command's exit status is
//! checked; the first failure aborts the run with a non-zero exit.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::RegenCertArgs;
use f5ops::device::CertRegen;

pub fn execute(_ctx: &Context, args: &RegenCertArgs) -> Result<()> {
    let regen = CertRegen::new()?;

    println!(
        "{}",
        "---   Updating Device Certificate to hostname   ---".bold()
    );
    println!("    hostname: {}", regen.hostname().cyan());
    println!("    subject:  {}", regen.subject());
    println!();

    if args.dry_run {
        println!("{}", "Planned commands (dry run, nothing executed):".bold());
        for cmd in regen.planned_commands() {
            println!("    {cmd}");
        }
        return Ok(());
    }

    let summary = regen.run()?;

    println!("{}", "Device certificate regenerated.".green().bold());
    println!("    key/cert modulus: {}", summary.modulus);
    println!("    key backup:  {}", summary.key_backup.display());
    println!("    cert backup: {}", summary.cert_backup.display());
    println!();
    println!("httpd restarted and sys config saved.");

    Ok(())
}
