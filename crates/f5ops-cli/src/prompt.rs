//! Interactive prompts for connection details and credentials.
//!
//! Flags win over prompts; the password additionally checks the
//! `F5_PASSWORD` environment variable so scripted runs never embed a
//! literal credential. The password prompt is always masked.

use anyhow::Result;
use dialoguer::{Input, Password};

/// Environment variable consulted before prompting for a password
pub const PASSWORD_ENV: &str = "F5_PASSWORD";

/// Prompt for a management host (IP or hostname).
pub fn host(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("{label} hostname or IP"))
        .interact_text()?;
    Ok(value)
}

/// Prompt for a username, defaulting to `admin`.
pub fn username() -> Result<String> {
    let value: String = Input::new()
        .with_prompt("Username")
        .default("admin".to_string())
        .interact_text()?;
    Ok(value)
}

/// Resolve the password for `user`: `F5_PASSWORD` env var, else a masked
/// prompt.
pub fn password(user: &str) -> Result<String> {
    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        return Ok(value);
    }

    let value = Password::new()
        .with_prompt(format!("Password for {user}"))
        .interact()?;
    Ok(value)
}

/// Prompt for a bash/tmsh command string.
pub fn command() -> Result<String> {
    let value: String = Input::new()
        .with_prompt("Enter bash/tmsh command to execute")
        .interact_text()?;
    Ok(value)
}
