//! Line Parser
//!
//! Turns one raw access-log line in the combined format into a typed
//! [`Record`], or reports why it was rejected:
//!
//! ```text
//! <ip> - - [<timestamp>] "<request>" <status> <bytes> "<referrer>" "<user-agent>"
//! ```
//!
//! Only a top-level grammar mismatch rejects a line. A timestamp that does not
//! parse degrades the record to the `"unknown"` time bucket, and a request
//! field with fewer than two tokens yields empty method, path and protocol.

mod grammar;
mod record;
mod request;
mod timestamp;

pub use grammar::LineParser;
pub use record::*;
pub use request::{RequestLine, split_request};
pub use timestamp::{TIMESTAMP_FORMAT, TimeBuckets, UNKNOWN_BUCKET, parse_timestamp};
