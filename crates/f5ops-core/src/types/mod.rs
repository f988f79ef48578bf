mod device;
mod util;

pub use device::*;
pub use util::*;
