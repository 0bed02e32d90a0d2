/// The `"METHOD PATH PROTOCOL"` field of a log line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
    pub protocol: String,
}

/// Splits the quoted request field on whitespace.
///
/// Token 0 is the method, token 1 the path and token 2, when present, the
/// protocol; anything after that is ignored. Fewer than two tokens yields an
/// all-empty request line.
pub fn split_request(raw: &str) -> RequestLine {
    let mut parts = raw.split_whitespace();

    match (parts.next(), parts.next()) {
        (Some(method), Some(path)) => RequestLine {
            method: method.to_string(),
            path: path.to_string(),
            protocol: parts.next().unwrap_or_default().to_string(),
        },
        _ => RequestLine::default(),
    }
}
