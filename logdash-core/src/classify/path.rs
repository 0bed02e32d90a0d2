/// Sentinel used when a request path carries no file extension.
pub const NO_EXTENSION: &str = "no_extension";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath(pub String);

impl NormalizedPath {
    /// Non-empty `/`-delimited segments of the normalized path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

#[derive(Debug)]
pub enum NormalizationOutcome<T> {
    Accept(T),
    Rewrite { value: T },
    Reject { reason: PathRejection },
}

impl<T> NormalizationOutcome<T> {
    pub fn into_value(self) -> Option<T> {
        match self {
            NormalizationOutcome::Accept(value) | NormalizationOutcome::Rewrite { value } => {
                Some(value)
            }
            NormalizationOutcome::Reject { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRejection {
    NulByte,
    PathTraversal,
}

/// Normalizes the path component of a logged request target.
///
/// - Ensures the path begins with "/" (relative paths are rewritten).
/// - Removes dot-segments ("." and "..").
/// - Collapses consecutive slashes.
/// - Removes trailing slashes except for the root path.
///
/// Paths containing NUL bytes or dot-segments that climb above the root are
/// rejected. Query strings must be stripped by the caller.
pub fn normalize_path(path: &str) -> NormalizationOutcome<NormalizedPath> {
    if path.as_bytes().contains(&0) {
        return NormalizationOutcome::Reject {
            reason: PathRejection::NulByte,
        };
    }

    // Treat empty as root (and canonicalize to root).
    if path.is_empty() {
        return NormalizationOutcome::Rewrite {
            value: NormalizedPath("/".to_string()),
        };
    }

    if path == "/" {
        return NormalizationOutcome::Accept(NormalizedPath("/".to_string()));
    }

    // Missing leading slash or a collapsed run of leading slashes.
    let mut rewritten = !path.starts_with('/') || path.starts_with("//");
    let mut stack: Vec<&str> = Vec::new();

    let body = path.trim_start_matches('/');

    for segment in body.split('/') {
        match segment {
            "" => {
                // repeated or trailing slash
                if !body.is_empty() {
                    rewritten = true;
                }
            }
            "." => {
                rewritten = true;
            }
            ".." => {
                if stack.pop().is_none() {
                    return NormalizationOutcome::Reject {
                        reason: PathRejection::PathTraversal,
                    };
                }
                rewritten = true;
            }
            _ => {
                stack.push(segment);
            }
        }
    }

    let mut normalized = String::from("/");
    normalized.push_str(&stack.join("/"));

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
        rewritten = true;
    }

    let path = NormalizedPath(normalized);

    if rewritten {
        NormalizationOutcome::Rewrite { value: path }
    } else {
        NormalizationOutcome::Accept(path)
    }
}

/// Drops the query string and fragment from a request target.
pub fn strip_query(target: &str) -> &str {
    target.split(['?', '#']).next().unwrap_or(target)
}

/// Lower-cased extension of the final path segment, without the leading dot.
///
/// Leading dots of the segment do not start an extension, so `/.htaccess`
/// has none. Empty paths, `/`, `-` and directory-style paths ending in `/`
/// all yield [`NO_EXTENSION`].
pub fn file_extension(target: &str) -> String {
    if target.is_empty() || target == "/" || target == "-" {
        return NO_EXTENSION.to_string();
    }

    let path = strip_query(target);
    if path.is_empty() || path.ends_with('/') {
        return NO_EXTENSION.to_string();
    }

    let normalized = normalize_path(path)
        .into_value()
        .map(|p| p.0)
        .unwrap_or_else(|| path.to_string());

    let last_segment = normalized.rsplit('/').next().unwrap_or_default();
    let stem = last_segment.trim_start_matches('.');

    match stem.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => NO_EXTENSION.to_string(),
    }
}

/// Number of non-empty segments in the normalized request path.
pub fn path_depth(target: &str) -> usize {
    if target.is_empty() || target == "-" {
        return 0;
    }

    let path = strip_query(target);

    match normalize_path(path).into_value() {
        Some(normalized) => normalized.segments().count(),
        // Escapes the root: count what was actually requested.
        None => path
            .split('/')
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .count(),
    }
}
