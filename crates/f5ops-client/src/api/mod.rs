//! API facades for the iControl REST endpoints f5ops consumes.

mod devices;
mod util;

pub use devices::DevicesApi;
pub use util::{util_cmd_args, UtilApi};
