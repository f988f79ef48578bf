//! # f5ops-cli
//!
//! Command-line tools for administering F5 BIG-IP and BIG-IQ appliances
//! over iControl REST.
//!
//! ## Commands
//!
//! - **inventory**: export a BIG-IQ device list as an Ansible inventory file
//! - **exec**: run a single bash/tmsh command on a BIG-IP
//! - **shell**: interactive bash/tmsh loop against one appliance
//! - **regen-cert**: regenerate the local self-signed device certificate
//! - **config**: manage CLI configuration

pub mod cli;
pub mod config;
pub mod output;
pub mod prompt;

pub use cli::run;
