//! `tmsh` invocations for service restart and config save.

use crate::cmd::run_checked;
use crate::error::Result;

/// Restart the GUI httpd daemon so it picks up the new cert/key.
pub fn restart_httpd() -> Result<()> {
    run_checked("tmsh", &["restart", "sys", "service", "httpd"])?;
    Ok(())
}

/// Persist the running configuration.
pub fn save_config() -> Result<()> {
    run_checked("tmsh", &["save", "sys", "config"])?;
    Ok(())
}
