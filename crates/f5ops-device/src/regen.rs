//! The certificate regeneration workflow.
//!
//! Ordered steps, each aborting the run on failure:
//!
//! 1. confirm this host is actually a BIG-IP (marker files present)
//! 2. back up the current key/cert to `<path>.old`
//! 3. generate a fresh self-signed cert/key over the active paths
//! 4. confirm the new key and cert share an RSA modulus
//! 5. append the new cert to the big3d and GTM trust stores
//! 6. restart httpd
//! 7. save the running config
//!
//! A modulus mismatch at step 4 fails the run; the `.old` backups are left
//! for manual recovery, no automatic rollback is attempted.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{DeviceError, Result};
use crate::openssl;
use crate::tmsh;
use crate::trust;

/// File locations the workflow reads and mutates.
///
/// `Default` is the real BIG-IP layout; tests point everything at a
/// temp directory.
#[derive(Debug, Clone)]
pub struct CertPaths {
    /// Active GUI certificate
    pub cert: PathBuf,
    /// Active GUI private key
    pub key: PathBuf,
    /// License file, used only as an appliance marker
    pub license: PathBuf,
    /// big3d (LTM) peer trust store
    pub big3d_trust: PathBuf,
    /// GTM peer trust store
    pub gtm_trust: PathBuf,
}

impl Default for CertPaths {
    fn default() -> Self {
        Self {
            cert: PathBuf::from("/config/httpd/conf/ssl.crt/server.crt"),
            key: PathBuf::from("/config/httpd/conf/ssl.key/server.key"),
            license: PathBuf::from("/config/bigip.license"),
            big3d_trust: PathBuf::from("/config/big3d/client.crt"),
            gtm_trust: PathBuf::from("/config/gtm/server.crt"),
        }
    }
}

impl CertPaths {
    /// Backup path for the key (`<key>.old`)
    #[must_use]
    pub fn old_key(&self) -> PathBuf {
        with_old_suffix(&self.key)
    }

    /// Backup path for the certificate (`<cert>.old`)
    #[must_use]
    pub fn old_cert(&self) -> PathBuf {
        with_old_suffix(&self.cert)
    }
}

fn with_old_suffix(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".old");
    PathBuf::from(name)
}

/// Outcome of a successful run, for operator-facing output.
#[derive(Debug, Clone)]
pub struct RegenSummary {
    /// CN used for the new certificate
    pub hostname: String,
    /// Full subject string handed to openssl
    pub subject: String,
    /// Abbreviated shared RSA modulus of the new pair
    pub modulus: String,
    /// Where the old key was copied
    pub key_backup: PathBuf,
    /// Where the old cert was copied
    pub cert_backup: PathBuf,
}

/// The regeneration workflow over a set of paths.
#[derive(Debug, Clone)]
pub struct CertRegen {
    paths: CertPaths,
    hostname: String,
}

impl CertRegen {
    /// Workflow against the real BIG-IP paths with the local hostname as CN.
    pub fn new() -> Result<Self> {
        Ok(Self {
            paths: CertPaths::default(),
            hostname: openssl::local_hostname()?,
        })
    }

    /// Workflow with explicit paths and CN (tests, unusual layouts).
    #[must_use]
    pub fn with_paths(paths: CertPaths, hostname: impl Into<String>) -> Self {
        Self {
            paths,
            hostname: hostname.into(),
        }
    }

    /// The CN the new certificate will carry
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The subject string handed to openssl
    #[must_use]
    pub fn subject(&self) -> String {
        openssl::subject(&self.hostname)
    }

    /// Confirm this host looks like a BIG-IP before touching anything.
    ///
    /// All three marker files (cert, key, license) must exist.
    pub fn check_appliance(&self) -> Result<()> {
        for marker in [&self.paths.cert, &self.paths.key, &self.paths.license] {
            if !marker.exists() {
                return Err(DeviceError::NotAnAppliance {
                    missing: marker.display().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Copy the active key and cert to their `.old` backup paths.
    pub fn backup(&self) -> Result<(PathBuf, PathBuf)> {
        let old_key = self.paths.old_key();
        let old_cert = self.paths.old_cert();

        info!(from = %self.paths.key.display(), to = %old_key.display(), "backing up key");
        std::fs::copy(&self.paths.key, &old_key)
            .map_err(|e| DeviceError::io(self.paths.key.display().to_string(), e))?;

        info!(from = %self.paths.cert.display(), to = %old_cert.display(), "backing up cert");
        std::fs::copy(&self.paths.cert, &old_cert)
            .map_err(|e| DeviceError::io(self.paths.cert.display().to_string(), e))?;

        Ok((old_key, old_cert))
    }

    /// Confirm the new key and certificate share an RSA modulus.
    pub fn verify_pair(&self) -> Result<String> {
        let cert_mod = openssl::cert_modulus(&self.paths.cert)?;
        let key_mod = openssl::key_modulus(&self.paths.key)?;

        if openssl::moduli_match(&cert_mod, &key_mod) {
            Ok(openssl::abbreviate(&cert_mod))
        } else {
            warn!("generated key and certificate do not match");
            Err(DeviceError::KeyCertMismatch {
                cert: openssl::abbreviate(&cert_mod),
                key: openssl::abbreviate(&key_mod),
            })
        }
    }

    /// Execute the whole workflow.
    pub fn run(&self) -> Result<RegenSummary> {
        self.check_appliance()?;

        let (key_backup, cert_backup) = self.backup()?;

        let subject = self.subject();
        info!(%subject, "generating self-signed cert/key");
        openssl::generate_self_signed(&subject, &self.paths.key, &self.paths.cert)?;

        let modulus = self.verify_pair()?;

        trust::append_to_stores(
            &self.paths.cert,
            &[&self.paths.big3d_trust, &self.paths.gtm_trust],
        )?;

        info!("restarting httpd");
        tmsh::restart_httpd()?;

        info!("saving sys config");
        tmsh::save_config()?;

        Ok(RegenSummary {
            hostname: self.hostname.clone(),
            subject,
            modulus,
            key_backup,
            cert_backup,
        })
    }

    /// Human-readable plan of the external commands `run` would execute.
    #[must_use]
    pub fn planned_commands(&self) -> Vec<String> {
        let p = &self.paths;
        vec![
            format!("cp {} {}", p.key.display(), self.paths.old_key().display()),
            format!("cp {} {}", p.cert.display(), self.paths.old_cert().display()),
            format!(
                "openssl req -x509 -nodes -days {} -newkey {} -subj '{}' -keyout {} -out {}",
                openssl::VALIDITY_DAYS,
                openssl::KEY_SPEC,
                self.subject(),
                p.key.display(),
                p.cert.display()
            ),
            format!("openssl x509 -noout -modulus -in {}", p.cert.display()),
            format!("openssl rsa -noout -modulus -in {}", p.key.display()),
            format!("cat {} >> {}", p.cert.display(), p.big3d_trust.display()),
            format!("cat {} >> {}", p.cert.display(), p.gtm_trust.display()),
            "tmsh restart sys service httpd".to_string(),
            "tmsh save sys config".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths_in(dir: &Path) -> CertPaths {
        CertPaths {
            cert: dir.join("server.crt"),
            key: dir.join("server.key"),
            license: dir.join("bigip.license"),
            big3d_trust: dir.join("big3d_client.crt"),
            gtm_trust: dir.join("gtm_server.crt"),
        }
    }

    fn seed_markers(paths: &CertPaths) {
        std::fs::write(&paths.cert, "OLD CERT BYTES").unwrap();
        std::fs::write(&paths.key, "OLD KEY BYTES").unwrap();
        std::fs::write(&paths.license, "Registration Key: none").unwrap();
    }

    #[test]
    fn aborts_before_any_mutation_when_markers_absent() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let regen = CertRegen::with_paths(paths.clone(), "bigip1.example.net");

        let err = regen.run().unwrap_err();
        assert!(matches!(err, DeviceError::NotAnAppliance { .. }));

        assert!(!paths.old_key().exists());
        assert!(!paths.old_cert().exists());
        assert!(!paths.big3d_trust.exists());
    }

    #[test]
    fn check_names_the_missing_marker() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.cert, "CERT").unwrap();
        std::fs::write(&paths.key, "KEY").unwrap();
        // license missing

        let regen = CertRegen::with_paths(paths.clone(), "bigip1");
        match regen.check_appliance().unwrap_err() {
            DeviceError::NotAnAppliance { missing } => {
                assert_eq!(missing, paths.license.display().to_string());
            }
            other => panic!("expected NotAnAppliance, got {other:?}"),
        }
    }

    #[test]
    fn backups_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        seed_markers(&paths);

        let regen = CertRegen::with_paths(paths.clone(), "bigip1");
        regen.check_appliance().unwrap();
        let (key_backup, cert_backup) = regen.backup().unwrap();

        assert_eq!(
            std::fs::read(&key_backup).unwrap(),
            std::fs::read(&paths.key).unwrap()
        );
        assert_eq!(
            std::fs::read(&cert_backup).unwrap(),
            std::fs::read(&paths.cert).unwrap()
        );
        assert_eq!(key_backup, paths.old_key());
        assert_eq!(cert_backup, paths.old_cert());
    }

    #[test]
    fn subject_uses_fixed_fields_and_hostname() {
        let regen = CertRegen::with_paths(CertPaths::default(), "ltm3.example.net");
        assert_eq!(regen.subject(), "/C=US/O=f5/OU=IT/CN=ltm3.example.net");
    }

    #[test]
    fn plan_lists_every_step_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let regen = CertRegen::with_paths(paths_in(dir.path()), "bigip1");
        let plan = regen.planned_commands();

        assert_eq!(plan.len(), 9);
        assert!(plan[2].contains("-days 3650"));
        assert!(plan[2].contains("-newkey rsa:2048"));
        assert!(plan[2].contains("/C=US/O=f5/OU=IT/CN=bigip1"));
        assert_eq!(plan[7], "tmsh restart sys service httpd");
        assert_eq!(plan[8], "tmsh save sys config");
    }

    #[test]
    fn default_paths_are_the_bigip_layout() {
        let paths = CertPaths::default();
        assert_eq!(
            paths.cert,
            PathBuf::from("/config/httpd/conf/ssl.crt/server.crt")
        );
        assert_eq!(
            paths.old_cert(),
            PathBuf::from("/config/httpd/conf/ssl.crt/server.crt.old")
        );
        assert_eq!(paths.license, PathBuf::from("/config/bigip.license"));
    }
}
