//! Core types and errors for the f5ops iControl REST tooling.
//!
//! This crate provides the foundational pieces used across the workspace:
//!
//! - **Types**: serde representations of the iControl REST payloads we
//!   consume (device inventory, `util/bash` results)
//! - **Errors**: the shared [`F5Error`] taxonomy
//! - **Inventory**: rendering a BIG-IQ device list as an Ansible
//!   inventory file

mod error;
pub mod inventory;
pub mod types;

pub use error::{F5Error, Result};
pub use types::*;
