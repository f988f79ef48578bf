//! Appliance-local device certificate regeneration for BIG-IP.
//!
//! Replaces the self-signed GUI certificate with a fresh one whose CN is
//! the local hostname, then re-trusts it and bounces httpd. Runs on the
//! appliance itself (or pushed there by an orchestration tool).
//!
//! The DSC certificates used for HA (`dtdi.crt`/`dtdi.key`) are never
//! touched.
//!
//! See K6353: Updating a self-signed SSL device certificate on a BIG-IP
//! system.

mod cmd;
mod error;
pub mod openssl;
mod regen;
pub mod tmsh;
pub mod trust;

pub use error::{DeviceError, Result};
pub use regen::{CertPaths, CertRegen, RegenSummary};
