use crate::input::error::InputError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a log file for buffered reading, decompressing gzip transparently.
///
/// Gzip is picked by a `.gz` extension or, failing that, by the magic bytes
/// at the start of the file. Concatenated gzip members are read as one
/// stream, which is what `logrotate` with `delaycompress` can produce.
pub fn open_source(path: &Path) -> Result<Box<dyn BufRead + Send>, InputError> {
    let file = File::open(path).map_err(|e| InputError::open(path, e))?;
    let mut reader = BufReader::new(file);

    let compressed = is_gzip_path(path) || {
        let head = reader.fill_buf().map_err(|e| InputError::read(path, e))?;
        head.starts_with(&GZIP_MAGIC)
    };

    if compressed {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}
