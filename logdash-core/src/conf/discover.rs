use crate::conf::error::ConfigError;
use glob::glob;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Discovers files matching a glob pattern.
///
/// Searches the filesystem for all regular files that match the pattern,
/// resolved against `root`, and returns them in sorted order. Unreadable
/// entries and directories are filtered out.
///
/// # Errors
///
/// Returns `ConfigError::Glob` if the pattern is malformed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| ConfigError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Resolves a glob pattern relative to a root directory.
///
/// Absolute patterns are returned unchanged.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}

/// Expands every pattern in order and concatenates the matches.
///
/// Each pattern contributes its own sorted matches; a file matched by more
/// than one pattern is kept at its first position. Patterns that match
/// nothing are skipped.
///
/// # Errors
///
/// `ConfigError::NoSources` when no pattern matches anything.
pub fn resolve_sources(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, ConfigError> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for pattern in patterns {
        for path in discover(root, pattern)? {
            if seen.insert(path.clone()) {
                sources.push(path);
            }
        }
    }

    if sources.is_empty() {
        return Err(ConfigError::NoSources {
            patterns: patterns.to_vec(),
        });
    }

    Ok(sources)
}
