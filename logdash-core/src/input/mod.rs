//! Opening access-log sources and splitting them into lines.

mod error;
mod lines;
mod source;
#[cfg(test)]
mod tests;

pub use error::InputError;
pub use lines::{LogLines, open_lines};
pub use source::{GZIP_MAGIC, is_gzip_path, open_source};
