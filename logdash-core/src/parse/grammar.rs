use crate::classify::{DeviceClassifier, classify_ip, file_extension, is_bot, path_depth};
use crate::parse::record::{ParseOutcome, Record, RejectReason};
use crate::parse::request::split_request;
use crate::parse::timestamp::{TimeBuckets, parse_timestamp};
use once_cell::sync::Lazy;
use regex::Regex;

static COMBINED_LOG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?P<ip>[0-9.]+) - - \[(?P<timestamp>[^\]]+)\] "(?P<request>[^"]*)" (?P<status>[0-9]+) (?P<bytes>[0-9]+) "(?P<referrer>[^"]*)" "(?P<user_agent>[^"]*)""#,
    )
    .expect("combined log pattern compiles")
});

/// Parses combined-format access-log lines into [`Record`]s.
///
/// Holds the user-agent device classifier so one instance can be reused for a
/// whole stream.
#[derive(Default)]
pub struct LineParser {
    devices: DeviceClassifier,
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            devices: DeviceClassifier::new(),
        }
    }

    pub fn parse_line(&self, line: &str) -> ParseOutcome {
        let Some(caps) = COMBINED_LOG_LINE.captures(line.trim()) else {
            return ParseOutcome::Rejected {
                reason: RejectReason::GrammarMismatch,
            };
        };

        let Ok(status) = caps["status"].parse::<u32>() else {
            return ParseOutcome::Rejected {
                reason: RejectReason::StatusOutOfRange,
            };
        };

        let Ok(bytes) = caps["bytes"].parse::<u64>() else {
            return ParseOutcome::Rejected {
                reason: RejectReason::BytesOutOfRange,
            };
        };

        let ip = &caps["ip"];
        let user_agent = &caps["user_agent"];
        let request = split_request(&caps["request"]);
        let timestamp = parse_timestamp(&caps["timestamp"]);
        let buckets = TimeBuckets::from_timestamp(timestamp.as_ref());

        ParseOutcome::Parsed(Record {
            ip: ip.to_string(),
            timestamp,
            file_extension: file_extension(&request.path),
            path_depth: path_depth(&request.path),
            method: request.method,
            path: request.path,
            protocol: request.protocol,
            status,
            bytes,
            referrer: caps["referrer"].to_string(),
            user_agent: user_agent.to_string(),
            is_bot: is_bot(user_agent),
            ip_class: classify_ip(ip),
            device: self.devices.classify(user_agent),
            hour_bucket: buckets.hour,
            day_bucket: buckets.day,
        })
    }
}
