//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Administrative tools for F5 BIG-IP and BIG-IQ appliances
///
/// Export device inventories, run ad-hoc bash/tmsh commands over
/// iControl REST, and regenerate self-signed device certificates.
#[derive(Parser, Debug)]
#[command(name = "f5ops")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (debug logs to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip TLS certificate verification (appliances commonly have
    /// self-signed device certs)
    #[arg(long, global = true)]
    pub insecure: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a BIG-IQ device list as an Ansible inventory file
    Inventory(InventoryArgs),

    /// Run a single bash/tmsh command on a BIG-IP
    Exec(ExecArgs),

    /// Interactive bash/tmsh loop against one appliance
    Shell(ShellArgs),

    /// Regenerate the local self-signed device certificate
    RegenCert(RegenCertArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Inventory command
// ============================================================================

#[derive(Args, Debug)]
pub struct InventoryArgs {
    /// IP or hostname of the BIG-IQ management interface
    #[arg(long)]
    pub bigiq: Option<String>,

    /// Username for authentication
    #[arg(short, long)]
    pub user: Option<String>,

    /// Output file <location>/<name>
    #[arg(long, default_value = "bigiq_inv.ini")]
    pub destfile: PathBuf,

    /// Ansible group header for the imported devices
    #[arg(long, default_value = f5ops::inventory::DEFAULT_GROUP)]
    pub group: String,
}

// ============================================================================
// Exec command
// ============================================================================

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// IP or hostname of the BIG-IP management or self IP
    #[arg(long)]
    pub bigip: Option<String>,

    /// Username for authentication
    #[arg(short, long)]
    pub user: Option<String>,

    /// Bash or tmsh command to execute
    #[arg(short, long)]
    pub cmd: Option<String>,
}

// ============================================================================
// Shell command
// ============================================================================

#[derive(Args, Debug)]
pub struct ShellArgs {
    /// IP or hostname of the BIG-IP management or self IP
    #[arg(long)]
    pub bigip: Option<String>,

    /// Username for authentication
    #[arg(short, long)]
    pub user: Option<String>,
}

// ============================================================================
// Regen-cert command
// ============================================================================

#[derive(Args, Debug)]
pub struct RegenCertArgs {
    /// Print the planned commands without mutating anything
    #[arg(long)]
    pub dry_run: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (bigiq, bigip, user, insecure, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
