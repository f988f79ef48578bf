//! Rust toolkit for administering F5 BIG-IP and BIG-IQ appliances.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use f5ops::F5Client;
//!
//! #[tokio::main]
//! async fn main() -> f5ops::Result<()> {
//!     let client = F5Client::builder("10.1.1.245", "admin", "secret").build()?;
//!
//!     // BIG-IQ device inventory
//!     let devices = client.devices().list().await?;
//!     for device in &devices.items {
//!         println!("{}\t{}", device.hostname, device.management_address);
//!     }
//!
//!     // Ad-hoc command on a BIG-IP
//!     let result = client.util().bash("tmsh list sys version").await?;
//!     println!("{}", result.output());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types
pub use f5ops_core::*;

// Re-export client
pub use f5ops_client::{api, F5Client, F5ClientBuilder};

// Re-export the appliance-local cert workflow
pub use f5ops_device as device;

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
