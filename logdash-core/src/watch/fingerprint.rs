use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Modification time and size of one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceStamp {
    pub modified: Option<SystemTime>,
    pub len: u64,
}

/// Stamps of every source present at capture time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprints {
    stamps: BTreeMap<PathBuf, SourceStamp>,
}

impl Fingerprints {
    /// Stats every path. Paths that cannot be stat'ed are left out, so a
    /// vanished file shows up as a change.
    pub fn capture(paths: &[PathBuf]) -> Self {
        let stamps = paths
            .iter()
            .filter_map(|path| {
                let meta = fs::metadata(path).ok()?;
                let stamp = SourceStamp {
                    modified: meta.modified().ok(),
                    len: meta.len(),
                };
                Some((path.clone(), stamp))
            })
            .collect();

        Self { stamps }
    }

    pub fn get(&self, path: &Path) -> Option<&SourceStamp> {
        self.stamps.get(path)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// True when a source appeared or disappeared, grew or shrank, or has a
    /// newer modification time than in `previous`.
    pub fn changed_since(&self, previous: &Fingerprints) -> bool {
        if self.stamps.len() != previous.stamps.len() {
            return true;
        }

        self.stamps.iter().any(|(path, now)| match previous.stamps.get(path) {
            None => true,
            Some(before) => now.len != before.len || now.modified > before.modified,
        })
    }
}
