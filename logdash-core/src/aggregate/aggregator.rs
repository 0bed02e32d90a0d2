use crate::aggregate::frequency::{FrequencyTable, Ranked};
use crate::aggregate::limits::TopKLimits;
use crate::aggregate::statistics::{
    BotUserSplit, ErrorPath, IpClassCounts, Statistics, StatusClassBreakdown, StatusClassCounts,
    TimelinePoint, TopIp, TrafficPoint, bytes_to_mb, percentage,
};
use crate::classify::DeviceType;
use crate::parse::Record;
use ahash::RandomState;
use std::collections::HashMap;

/// Single-pass fold of [`Record`]s into running statistics.
///
/// The aggregator owns the record store and every counter for the duration of
/// a run. `ingest` is O(1) amortized; the ranking, sorting and percentage work
/// is deferred to [`snapshot`](Self::snapshot). It is not meant to be shared
/// between threads: feed it from one owner.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<Record>,

    // Basic stats
    total_requests: u64,
    total_bytes: u64,
    bot_requests: u64,
    human_requests: u64,
    status_classes: StatusClassCounts,
    ip_classes: IpClassCounts,

    // Histograms
    status_codes: FrequencyTable<u32>,
    methods: FrequencyTable<String>,
    file_types: FrequencyTable<String>,
    path_depths: FrequencyTable<usize>,
    protocols: FrequencyTable<String>,
    devices: FrequencyTable<DeviceType>,

    // Timelines
    requests_per_hour: FrequencyTable<String>,
    requests_per_day: FrequencyTable<String>,
    bytes_per_hour: FrequencyTable<String>,

    // Rankings
    ips: FrequencyTable<String>,
    ip_bot_requests: FrequencyTable<String>,
    user_agents: FrequencyTable<String>,
    endpoints: FrequencyTable<String>,
    referrers: FrequencyTable<String>,
    error_paths: FrequencyTable<String>,
    error_statuses: HashMap<String, FrequencyTable<u32>, RandomState>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, record: Record) {
        self.total_requests += 1;
        self.total_bytes = self.total_bytes.saturating_add(record.bytes);

        if record.is_bot {
            self.bot_requests += 1;
            self.ip_bot_requests.increment(record.ip.as_str());
        } else {
            self.human_requests += 1;
        }

        self.status_classes.record(record.status);
        self.ip_classes.record(record.ip_class);

        self.status_codes.increment(&record.status);
        self.methods.increment(record.method.as_str());
        self.file_types.increment(record.file_extension.as_str());
        self.path_depths.increment(&record.path_depth);
        self.protocols.increment(record.protocol.as_str());
        self.devices.increment(&record.device);

        self.requests_per_hour.increment(record.hour_bucket.as_str());
        self.requests_per_day.increment(record.day_bucket.as_str());
        self.bytes_per_hour.add(record.hour_bucket.as_str(), record.bytes);

        self.ips.increment(record.ip.as_str());
        self.user_agents.increment(record.user_agent.as_str());
        self.endpoints.increment(record.path.as_str());

        if record.has_referrer() {
            self.referrers.increment(record.referrer.as_str());
        }

        if record.is_error() {
            self.error_paths.increment(record.path.as_str());
            match self.error_statuses.get_mut(record.path.as_str()) {
                Some(statuses) => statuses.increment(&record.status),
                None => {
                    let mut statuses = FrequencyTable::new();
                    statuses.increment(&record.status);
                    self.error_statuses.insert(record.path.clone(), statuses);
                }
            }
        }

        self.records.push(record);
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    /// Every ingested record, in ingestion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Builds a fresh [`Statistics`] from the current running state.
    ///
    /// Taking a snapshot does not change the aggregator; two snapshots with no
    /// `ingest` in between are equal.
    pub fn snapshot(&self, limits: &TopKLimits) -> Statistics {
        let total = self.total_requests;

        let mut status_codes = self.status_codes.ranked_in_order();
        status_codes.sort_by_key(|r| r.name);

        let mut path_depth = self.path_depths.ranked_in_order();
        path_depth.sort_by_key(|r| r.name);

        let traffic_timeline = self
            .bytes_per_hour
            .sorted_by_key()
            .into_iter()
            .map(|r| TrafficPoint {
                megabytes: bytes_to_mb(r.count),
                bucket: r.name,
                bytes: r.count,
            })
            .collect();

        Statistics {
            total_requests: total,
            total_bytes: self.total_bytes,
            total_transferred_mb: bytes_to_mb(self.total_bytes),
            unique_ips: self.ips.len(),
            unique_endpoints: self.endpoints.len(),

            status_codes,
            status_classes: StatusClassBreakdown::new(self.status_classes, total),

            requests_timeline: timeline(&self.requests_per_hour),
            daily_requests: timeline(&self.requests_per_day),
            traffic_timeline,

            top_ips: self.top_ips(limits.ips),
            top_user_agents: self.user_agents.top_k(limits.user_agents),
            top_endpoints: self.endpoints.top_k(limits.endpoints),
            top_file_types: self.file_types.top_k(limits.file_types),
            top_referrers: self.referrers.top_k(limits.referrers),
            top_http_methods: self.methods.top_k(limits.methods),
            top_error_paths: self.top_error_paths(limits.error_paths),

            path_depth,
            protocols: self.protocols.top_k(self.protocols.len()),
            devices: self.devices.top_k(self.devices.len()),

            bot_user: BotUserSplit {
                bot_requests: self.bot_requests,
                user_requests: self.human_requests,
                bot_percentage: percentage(self.bot_requests, total),
                user_percentage: percentage(self.human_requests, total),
            },
            ip_classification: self.ip_classes,
        }
    }

    fn top_ips(&self, k: usize) -> Vec<TopIp> {
        self.ips
            .top_k(k)
            .into_iter()
            .map(|Ranked { name, count }| TopIp {
                bot_percentage: percentage(self.ip_bot_requests.get(name.as_str()), count),
                name,
                count,
            })
            .collect()
    }

    fn top_error_paths(&self, k: usize) -> Vec<ErrorPath> {
        self.error_paths
            .top_k(k)
            .into_iter()
            .map(|Ranked { name, count }| {
                let statuses = self.error_statuses.get(&name);
                let status_distribution = statuses
                    .map(FrequencyTable::ranked_in_order)
                    .unwrap_or_default();
                let dominant_status = statuses
                    .and_then(|s| s.top_k(1).first().map(|r| r.name))
                    .unwrap_or_default();

                ErrorPath {
                    path: name,
                    count,
                    status_distribution,
                    dominant_status,
                }
            })
            .collect()
    }
}

fn timeline(table: &FrequencyTable<String>) -> Vec<TimelinePoint> {
    table
        .sorted_by_key()
        .into_iter()
        .map(|r| TimelinePoint {
            bucket: r.name,
            count: r.count,
        })
        .collect()
}
