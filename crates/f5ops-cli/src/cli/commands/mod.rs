//! Command implementations.

pub mod config;
pub mod exec;
pub mod inventory;
pub mod regen_cert;
pub mod shell;

use f5ops::F5Client;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::prompt;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration file
    pub config: Config,

    /// Output format
    pub output_format: OutputFormat,

    /// Skip TLS certificate verification
    pub insecure: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Resolve the BIG-IQ host: flag, config file, then prompt.
    pub fn resolve_bigiq(&self, flag: Option<String>) -> anyhow::Result<String> {
        match flag.or_else(|| self.config.bigiq.clone()) {
            Some(host) => Ok(host),
            None => prompt::host("BIG-IQ"),
        }
    }

    /// Resolve the BIG-IP host: flag, config file, then prompt.
    pub fn resolve_bigip(&self, flag: Option<String>) -> anyhow::Result<String> {
        match flag.or_else(|| self.config.bigip.clone()) {
            Some(host) => Ok(host),
            None => prompt::host("BIG-IP"),
        }
    }

    /// Resolve the username: flag, config file, then prompt (default admin).
    pub fn resolve_user(&self, flag: Option<String>) -> anyhow::Result<String> {
        match flag.or_else(|| self.config.user.clone()) {
            Some(user) => Ok(user),
            None => prompt::username(),
        }
    }

    /// Whether TLS verification should be skipped (flag or config file).
    #[must_use]
    pub const fn insecure(&self) -> bool {
        self.insecure || self.config.insecure
    }

    /// Build an authenticated client for the given appliance.
    pub fn client(&self, host: &str, user: &str, password: &str) -> anyhow::Result<F5Client> {
        let client = F5Client::builder(host, user, password)
            .insecure(self.insecure())
            .build()?;
        Ok(client)
    }
}
