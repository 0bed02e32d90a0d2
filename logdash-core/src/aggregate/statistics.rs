use crate::aggregate::frequency::Ranked;
use crate::classify::{DeviceType, IpClass};
use serde::Serialize;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Share of `part` in `total` as a percentage; 0 when `total` is 0.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Grouping of three-digit status codes. 1xx and codes of 600 and above
/// belong to no class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    ServerError,
}

impl StatusClass {
    pub fn from_status(status: u32) -> Option<Self> {
        match status {
            200..=299 => Some(StatusClass::Success),
            300..=399 => Some(StatusClass::Redirect),
            400..=499 => Some(StatusClass::ClientError),
            500..=599 => Some(StatusClass::ServerError),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusClassCounts {
    pub success: u64,
    pub redirect: u64,
    pub client_error: u64,
    pub server_error: u64,
}

impl StatusClassCounts {
    pub fn record(&mut self, status: u32) {
        match StatusClass::from_status(status) {
            Some(StatusClass::Success) => self.success += 1,
            Some(StatusClass::Redirect) => self.redirect += 1,
            Some(StatusClass::ClientError) => self.client_error += 1,
            Some(StatusClass::ServerError) => self.server_error += 1,
            None => {}
        }
    }

    pub fn total(&self) -> u64 {
        self.success + self.redirect + self.client_error + self.server_error
    }
}

/// Tally of client address scopes. Invalid addresses are not counted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IpClassCounts {
    pub private: u64,
    pub public: u64,
    pub loopback: u64,
    pub other: u64,
}

impl IpClassCounts {
    pub fn record(&mut self, class: IpClass) {
        match class {
            IpClass::Private => self.private += 1,
            IpClass::Public => self.public += 1,
            IpClass::Loopback => self.loopback += 1,
            IpClass::Other => self.other += 1,
            IpClass::Invalid => {}
        }
    }

    pub fn total(&self) -> u64 {
        self.private + self.public + self.loopback + self.other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusClassBreakdown {
    pub counts: StatusClassCounts,
    pub success_percentage: f64,
    pub redirect_percentage: f64,
    pub client_error_percentage: f64,
    pub server_error_percentage: f64,
}

impl StatusClassBreakdown {
    pub fn new(counts: StatusClassCounts, total: u64) -> Self {
        Self {
            counts,
            success_percentage: percentage(counts.success, total),
            redirect_percentage: percentage(counts.redirect, total),
            client_error_percentage: percentage(counts.client_error, total),
            server_error_percentage: percentage(counts.server_error, total),
        }
    }

    pub fn error_percentage(&self) -> f64 {
        self.client_error_percentage + self.server_error_percentage
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BotUserSplit {
    pub bot_requests: u64,
    pub user_requests: u64,
    pub bot_percentage: f64,
    pub user_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub bucket: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficPoint {
    pub bucket: String,
    pub bytes: u64,
    pub megabytes: f64,
}

/// A top client address with the share of its requests made by bots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopIp {
    pub name: String,
    pub count: u64,
    pub bot_percentage: f64,
}

/// A top error path with the status codes observed there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPath {
    pub path: String,
    pub count: u64,
    /// Codes of 400 and above seen at this path, in first-seen order.
    pub status_distribution: Vec<Ranked<u32>>,
    /// Most frequent code at this path, ties broken by first seen.
    pub dominant_status: u32,
}

/// Immutable snapshot of everything the aggregator knows.
///
/// Built fresh by [`Aggregator::snapshot`](crate::aggregate::Aggregator::snapshot)
/// and detached from it: handing a snapshot to a writer never observes later
/// ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_requests: u64,
    pub total_bytes: u64,
    pub total_transferred_mb: f64,
    pub unique_ips: usize,
    pub unique_endpoints: usize,

    /// Every observed code, ascending.
    pub status_codes: Vec<Ranked<u32>>,
    pub status_classes: StatusClassBreakdown,

    /// Hourly request counts, ordered by bucket key.
    pub requests_timeline: Vec<TimelinePoint>,
    /// Daily request counts, ordered by bucket key.
    pub daily_requests: Vec<TimelinePoint>,
    /// Hourly byte sums, ordered by bucket key.
    pub traffic_timeline: Vec<TrafficPoint>,

    pub top_ips: Vec<TopIp>,
    pub top_user_agents: Vec<Ranked<String>>,
    pub top_endpoints: Vec<Ranked<String>>,
    pub top_file_types: Vec<Ranked<String>>,
    pub top_referrers: Vec<Ranked<String>>,
    pub top_http_methods: Vec<Ranked<String>>,
    pub top_error_paths: Vec<ErrorPath>,

    /// Ascending by depth.
    pub path_depth: Vec<Ranked<usize>>,
    /// Descending by count.
    pub protocols: Vec<Ranked<String>>,
    /// Descending by count.
    pub devices: Vec<Ranked<DeviceType>>,

    pub bot_user: BotUserSplit,
    pub ip_classification: IpClassCounts,
}
