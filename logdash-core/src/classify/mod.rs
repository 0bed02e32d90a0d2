//! Per-record classification.
//!
//! Every function here is a pure function of fields already extracted from a
//! log line: bot detection from the user agent, scope of the client address,
//! file type and depth of the requested path, and a coarse device family.

mod bot;
mod device;
mod ip;
mod path;
#[cfg(test)]
mod tests;

pub use bot::*;
pub use device::*;
pub use ip::*;
pub use path::*;
