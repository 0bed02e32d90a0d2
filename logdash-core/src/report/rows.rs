//! Row shapes of the JSON files the dashboard reads.

use crate::aggregate::{Ranked, Statistics};
use crate::classify::{DeviceType, NO_EXTENSION};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

const DIRECT_REFERRER: &str = "Direct";
const UNKNOWN_PROTOCOL: &str = "Unknown";

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_requests: u64,
    pub unique_ips: usize,
    pub unique_endpoints: usize,
    pub total_transferred_mb: f64,
    pub success_rate: f64,
    pub error_rate: f64,
    pub bot_rate: f64,
    pub generated_at: String,
}

pub fn build_summary(stats: &Statistics, generated_at: DateTime<Utc>) -> Summary {
    Summary {
        total_requests: stats.total_requests,
        unique_ips: stats.unique_ips,
        unique_endpoints: stats.unique_endpoints,
        total_transferred_mb: round2(stats.total_transferred_mb),
        success_rate: round2(stats.status_classes.success_percentage),
        error_rate: round2(stats.status_classes.error_percentage()),
        bot_rate: round2(stats.bot_user.bot_percentage),
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

#[derive(Debug, Serialize)]
pub struct StatusRow {
    pub status: u32,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: &'static str,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct MethodRow {
    pub method: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct HourRow {
    pub hour: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct DayRow {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct TrafficRow {
    pub hour: String,
    pub bytes: u64,
    pub megabytes: f64,
}

#[derive(Debug, Serialize)]
pub struct IpRow {
    pub ip: String,
    pub count: u64,
    pub bot_percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct EndpointRow {
    pub endpoint: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct UserAgentRow {
    pub user_agent: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct ReferrerRow {
    pub referrer: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct FileTypeRow {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct DepthRow {
    pub depth: usize,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct ProtocolRow {
    pub protocol: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorPathRow {
    pub path: String,
    pub count: u64,
    /// Most frequent error status at this path.
    pub status: u32,
    pub status_distribution: Vec<StatusRow>,
}

#[derive(Debug, Serialize)]
pub struct IpClassRow {
    pub class: &'static str,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct BotUserRow {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct DeviceRow {
    pub device: DeviceType,
    pub count: u64,
}

fn status_rows(ranked: &[Ranked<u32>]) -> Vec<StatusRow> {
    ranked
        .iter()
        .map(|r| StatusRow {
            status: r.name,
            count: r.count,
        })
        .collect()
}

pub fn status_codes(stats: &Statistics) -> Vec<StatusRow> {
    status_rows(&stats.status_codes)
}

pub fn status_categories(stats: &Statistics) -> Vec<CategoryRow> {
    let classes = &stats.status_classes;
    let counts = classes.counts;
    vec![
        CategoryRow {
            category: "2xx",
            count: counts.success,
            percentage: round2(classes.success_percentage),
        },
        CategoryRow {
            category: "3xx",
            count: counts.redirect,
            percentage: round2(classes.redirect_percentage),
        },
        CategoryRow {
            category: "4xx",
            count: counts.client_error,
            percentage: round2(classes.client_error_percentage),
        },
        CategoryRow {
            category: "5xx",
            count: counts.server_error,
            percentage: round2(classes.server_error_percentage),
        },
    ]
}

pub fn http_methods(stats: &Statistics) -> Vec<MethodRow> {
    stats
        .top_http_methods
        .iter()
        .map(|r| MethodRow {
            method: r.name.clone(),
            count: r.count,
        })
        .collect()
}

pub fn requests_timeline(stats: &Statistics) -> Vec<HourRow> {
    stats
        .requests_timeline
        .iter()
        .map(|p| HourRow {
            hour: p.bucket.clone(),
            count: p.count,
        })
        .collect()
}

pub fn daily_requests(stats: &Statistics) -> Vec<DayRow> {
    stats
        .daily_requests
        .iter()
        .map(|p| DayRow {
            date: p.bucket.clone(),
            count: p.count,
        })
        .collect()
}

pub fn traffic_timeline(stats: &Statistics) -> Vec<TrafficRow> {
    stats
        .traffic_timeline
        .iter()
        .map(|p| TrafficRow {
            hour: p.bucket.clone(),
            bytes: p.bytes,
            megabytes: round2(p.megabytes),
        })
        .collect()
}

pub fn top_ips(stats: &Statistics) -> Vec<IpRow> {
    stats
        .top_ips
        .iter()
        .map(|r| IpRow {
            ip: r.name.clone(),
            count: r.count,
            bot_percentage: round2(r.bot_percentage),
        })
        .collect()
}

pub fn top_endpoints(stats: &Statistics) -> Vec<EndpointRow> {
    stats
        .top_endpoints
        .iter()
        .map(|r| EndpointRow {
            endpoint: r.name.clone(),
            count: r.count,
        })
        .collect()
}

pub fn top_user_agents(stats: &Statistics) -> Vec<UserAgentRow> {
    stats
        .top_user_agents
        .iter()
        .map(|r| UserAgentRow {
            user_agent: r.name.clone(),
            count: r.count,
        })
        .collect()
}

pub fn top_referrers(stats: &Statistics) -> Vec<ReferrerRow> {
    stats
        .top_referrers
        .iter()
        .map(|r| ReferrerRow {
            referrer: non_empty_or(&r.name, DIRECT_REFERRER),
            count: r.count,
        })
        .collect()
}

pub fn file_types(stats: &Statistics) -> Vec<FileTypeRow> {
    stats
        .top_file_types
        .iter()
        .map(|r| FileTypeRow {
            kind: non_empty_or(&r.name, NO_EXTENSION),
            count: r.count,
        })
        .collect()
}

pub fn path_depth(stats: &Statistics) -> Vec<DepthRow> {
    stats
        .path_depth
        .iter()
        .map(|r| DepthRow {
            depth: r.name,
            count: r.count,
        })
        .collect()
}

pub fn protocols(stats: &Statistics) -> Vec<ProtocolRow> {
    stats
        .protocols
        .iter()
        .map(|r| ProtocolRow {
            protocol: non_empty_or(&r.name, UNKNOWN_PROTOCOL),
            count: r.count,
        })
        .collect()
}

pub fn error_paths(stats: &Statistics) -> Vec<ErrorPathRow> {
    stats
        .top_error_paths
        .iter()
        .map(|e| ErrorPathRow {
            path: e.path.clone(),
            count: e.count,
            status: e.dominant_status,
            status_distribution: status_rows(&e.status_distribution),
        })
        .collect()
}

pub fn ip_classification(stats: &Statistics) -> Vec<IpClassRow> {
    let ips = stats.ip_classification;
    vec![
        IpClassRow {
            class: "private",
            count: ips.private,
        },
        IpClassRow {
            class: "public",
            count: ips.public,
        },
        IpClassRow {
            class: "loopback",
            count: ips.loopback,
        },
        IpClassRow {
            class: "other",
            count: ips.other,
        },
    ]
}

pub fn bot_user(stats: &Statistics) -> Vec<BotUserRow> {
    let split = stats.bot_user;
    vec![
        BotUserRow {
            kind: "Bot",
            count: split.bot_requests,
            percentage: round2(split.bot_percentage),
        },
        BotUserRow {
            kind: "User",
            count: split.user_requests,
            percentage: round2(split.user_percentage),
        },
    ]
}

pub fn devices(stats: &Statistics) -> Vec<DeviceRow> {
    stats
        .devices
        .iter()
        .map(|r| DeviceRow {
            device: r.name,
            count: r.count,
        })
        .collect()
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
