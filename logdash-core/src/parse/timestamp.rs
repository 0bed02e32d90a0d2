use chrono::{DateTime, FixedOffset};

/// Bucket key for records whose timestamp could not be parsed.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// `10/Oct/2023:13:55:36 -0700`
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

/// Hour and day grouping keys of a record.
///
/// Keys use the wall-clock fields in the timestamp's own offset, so
/// `13:55:36 -0700` lands in the `13:00` bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBuckets {
    pub hour: String,
    pub day: String,
}

impl TimeBuckets {
    pub fn from_timestamp(timestamp: Option<&DateTime<FixedOffset>>) -> Self {
        match timestamp {
            Some(ts) => Self {
                hour: ts.format("%Y-%m-%d %H:00").to_string(),
                day: ts.format("%Y-%m-%d").to_string(),
            },
            None => Self {
                hour: UNKNOWN_BUCKET.to_string(),
                day: UNKNOWN_BUCKET.to_string(),
            },
        }
    }
}
