//! Async iControl REST client for BIG-IP and BIG-IQ appliances.
//!
//! This crate provides the main [`F5Client`] used by the f5ops tools to
//! talk to an appliance's management interface over basic-auth HTTPS.

pub mod api;
mod client;

pub use client::{F5Client, F5ClientBuilder};
pub use f5ops_core::{F5Error, Result};
