//! Trust-store updates: re-trusting the new device certificate.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{DeviceError, Result};

/// Append the certificate at `cert` to each trust-store file.
///
/// big3d (LTM) and GTM both keep a flat PEM bundle of peer certificates
/// that includes the appliance's own; the new cert is appended, never
/// replacing existing entries.
pub fn append_to_stores(cert: &Path, stores: &[&Path]) -> Result<()> {
    let pem = std::fs::read(cert).map_err(|e| DeviceError::io(cert.display().to_string(), e))?;

    for store in stores {
        info!(store = %store.display(), "appending device cert to trust store");

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(store)
            .map_err(|e| DeviceError::io(store.display().to_string(), e))?;

        file.write_all(&pem)
            .map_err(|e| DeviceError::io(store.display().to_string(), e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_without_clobbering() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("server.crt");
        let store = dir.path().join("client.crt");

        std::fs::write(&cert, "NEW CERT\n").unwrap();
        std::fs::write(&store, "EXISTING CERT\n").unwrap();

        append_to_stores(&cert, &[&store]).unwrap();

        let contents = std::fs::read_to_string(&store).unwrap();
        assert_eq!(contents, "EXISTING CERT\nNEW CERT\n");
    }

    #[test]
    fn creates_missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("server.crt");
        let store = dir.path().join("server_trust.crt");

        std::fs::write(&cert, "NEW CERT\n").unwrap();
        append_to_stores(&cert, &[&store]).unwrap();

        assert_eq!(std::fs::read_to_string(&store).unwrap(), "NEW CERT\n");
    }

    #[test]
    fn missing_cert_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("absent.crt");
        let store = dir.path().join("client.crt");

        let err = append_to_stores(&cert, &[&store]).unwrap_err();
        assert!(matches!(err, DeviceError::Io { .. }));
        assert!(!store.exists());
    }
}
