use crate::input::error::InputError;
use crate::input::source::open_source;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Iterator over the decoded lines of one source.
///
/// Line endings (`\n` or `\r\n`) are stripped. Bytes that are not valid
/// UTF-8 are replaced rather than failing the line. The first I/O error is
/// yielded once and ends the iteration.
pub struct LogLines<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            buf: Vec::with_capacity(512),
            done: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(InputError::read(&self.path, e)))
            }
        }
    }
}

pub fn open_lines(path: &Path) -> Result<LogLines<Box<dyn BufRead + Send>>, InputError> {
    Ok(LogLines::new(open_source(path)?, path))
}
