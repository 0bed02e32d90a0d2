use crate::classify::{DeviceType, IpClass};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One fully parsed log line with its derived classification fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub ip: String,
    /// `None` when the bracketed timestamp did not parse.
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status: u32,
    pub bytes: u64,
    pub referrer: String,
    pub user_agent: String,
    pub file_extension: String,
    pub path_depth: usize,
    pub is_bot: bool,
    pub ip_class: IpClass,
    pub device: DeviceType,
    pub hour_bucket: String,
    pub day_bucket: String,
}

impl Record {
    /// True when the referrer header carried a value.
    pub fn has_referrer(&self) -> bool {
        !self.referrer.is_empty() && self.referrer != "-"
    }

    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

#[derive(Debug)]
pub enum ParseOutcome {
    Parsed(Record),
    Rejected { reason: RejectReason },
}

impl ParseOutcome {
    pub fn into_record(self) -> Option<Record> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            ParseOutcome::Rejected { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The line does not have the combined-log shape.
    GrammarMismatch,
    /// Status digits do not fit a 32-bit integer.
    StatusOutOfRange,
    /// Byte-count digits do not fit a 64-bit counter.
    BytesOutOfRange,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::GrammarMismatch => "grammar_mismatch",
            RejectReason::StatusOutOfRange => "status_out_of_range",
            RejectReason::BytesOutOfRange => "bytes_out_of_range",
        }
    }
}
