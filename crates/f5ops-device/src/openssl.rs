//! `openssl` invocations: self-signed generation and key/cert matching.

use std::path::Path;

use crate::cmd::run_checked;
use crate::error::{DeviceError, Result};

/// Certificate validity in days (10 years)
pub const VALIDITY_DAYS: u32 = 3650;

/// Key algorithm and size handed to `openssl req -newkey`
pub const KEY_SPEC: &str = "rsa:2048";

/// Subject country
pub const COUNTRY: &str = "US";

/// Subject organization
pub const ORGANIZATION: &str = "f5";

/// Subject organizational unit
pub const ORG_UNIT: &str = "IT";

/// Prefix `openssl -modulus` puts in front of the hex digest
const MODULUS_PREFIX: &str = "Modulus=";

/// Build the certificate subject for the given common name.
///
/// Always `/C=US/O=f5/OU=IT/CN=<cn>`; everything but the CN is fixed.
#[must_use]
pub fn subject(common_name: &str) -> String {
    format!("/C={COUNTRY}/O={ORGANIZATION}/OU={ORG_UNIT}/CN={common_name}")
}

/// The local hostname, used as the certificate CN.
pub fn local_hostname() -> Result<String> {
    let name = hostname::get().map_err(|e| DeviceError::Hostname(e.to_string()))?;
    Ok(name.to_string_lossy().into_owned())
}

/// Generate a self-signed certificate and key, overwriting both paths.
pub fn generate_self_signed(subject: &str, key: &Path, cert: &Path) -> Result<()> {
    let days = VALIDITY_DAYS.to_string();
    run_checked(
        "openssl",
        &[
            "req",
            "-x509",
            "-nodes",
            "-days",
            &days,
            "-newkey",
            KEY_SPEC,
            "-subj",
            subject,
            "-keyout",
            &key.display().to_string(),
            "-out",
            &cert.display().to_string(),
        ],
    )?;
    Ok(())
}

/// RSA modulus of a certificate, prefix stripped.
pub fn cert_modulus(cert: &Path) -> Result<String> {
    let out = run_checked(
        "openssl",
        &["x509", "-noout", "-modulus", "-in", &cert.display().to_string()],
    )?;
    Ok(strip_modulus_prefix(&out).to_string())
}

/// RSA modulus of a private key, prefix stripped.
pub fn key_modulus(key: &Path) -> Result<String> {
    let out = run_checked(
        "openssl",
        &["rsa", "-noout", "-modulus", "-in", &key.display().to_string()],
    )?;
    Ok(strip_modulus_prefix(&out).to_string())
}

/// Strip the fixed `Modulus=` prefix from an `openssl -modulus` line.
#[must_use]
pub fn strip_modulus_prefix(line: &str) -> &str {
    line.trim().strip_prefix(MODULUS_PREFIX).unwrap_or_else(|| line.trim())
}

/// True iff the two digest lines are equal after stripping the prefix.
#[must_use]
pub fn moduli_match(cert_line: &str, key_line: &str) -> bool {
    strip_modulus_prefix(cert_line) == strip_modulus_prefix(key_line)
}

/// Abbreviate a modulus for error messages and logs.
#[must_use]
pub fn abbreviate(modulus: &str) -> String {
    if modulus.len() > 16 {
        format!("{}...", &modulus[..16])
    } else {
        modulus.to_string()
    }
}
