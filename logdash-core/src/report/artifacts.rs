use crate::aggregate::Statistics;
use crate::report::error::ReportError;
use crate::report::rows::{self, build_summary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Every file written by [`write_artifacts`], in write order.
pub const ARTIFACT_FILES: [&str; 19] = [
    "summary.json",
    "status_codes.json",
    "status_categories.json",
    "http_methods.json",
    "requests_timeline.json",
    "daily_requests.json",
    "traffic_timeline.json",
    "top_ips.json",
    "top_endpoints.json",
    "top_user_agents.json",
    "top_referrers.json",
    "file_types.json",
    "path_depth.json",
    "protocols.json",
    "error_paths.json",
    "ip_classification.json",
    "bot_user.json",
    "devices.json",
    "raw_stats.json",
];

/// Writes the dashboard JSON files for `stats` into `dir`.
///
/// The directory is created if needed. Each file is written to a temporary
/// sibling and renamed into place, so a dashboard polling the directory
/// never reads a half-written file. Returns the written paths.
pub fn write_artifacts(
    stats: &Statistics,
    dir: &Path,
    pretty: bool,
) -> Result<Vec<PathBuf>, ReportError> {
    write_artifacts_at(stats, dir, pretty, Utc::now())
}

/// [`write_artifacts`] with a fixed `generated_at` stamp.
pub fn write_artifacts_at(
    stats: &Statistics,
    dir: &Path,
    pretty: bool,
    generated_at: DateTime<Utc>,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(dir).map_err(|e| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let writer = JsonWriter { dir, pretty };
    let [
        summary,
        status_codes,
        status_categories,
        http_methods,
        requests_timeline,
        daily_requests,
        traffic_timeline,
        top_ips,
        top_endpoints,
        top_user_agents,
        top_referrers,
        file_types,
        path_depth,
        protocols,
        error_paths,
        ip_classification,
        bot_user,
        devices,
        raw_stats,
    ] = ARTIFACT_FILES;

    let written = vec![
        writer.write(summary, &build_summary(stats, generated_at))?,
        writer.write(status_codes, &rows::status_codes(stats))?,
        writer.write(status_categories, &rows::status_categories(stats))?,
        writer.write(http_methods, &rows::http_methods(stats))?,
        writer.write(requests_timeline, &rows::requests_timeline(stats))?,
        writer.write(daily_requests, &rows::daily_requests(stats))?,
        writer.write(traffic_timeline, &rows::traffic_timeline(stats))?,
        writer.write(top_ips, &rows::top_ips(stats))?,
        writer.write(top_endpoints, &rows::top_endpoints(stats))?,
        writer.write(top_user_agents, &rows::top_user_agents(stats))?,
        writer.write(top_referrers, &rows::top_referrers(stats))?,
        writer.write(file_types, &rows::file_types(stats))?,
        writer.write(path_depth, &rows::path_depth(stats))?,
        writer.write(protocols, &rows::protocols(stats))?,
        writer.write(error_paths, &rows::error_paths(stats))?,
        writer.write(ip_classification, &rows::ip_classification(stats))?,
        writer.write(bot_user, &rows::bot_user(stats))?,
        writer.write(devices, &rows::devices(stats))?,
        writer.write(raw_stats, stats)?,
    ];

    debug!(dir = %dir.display(), files = written.len(), "artifacts written");
    Ok(written)
}

struct JsonWriter<'a> {
    dir: &'a Path,
    pretty: bool,
}

impl JsonWriter<'_> {
    fn write<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<PathBuf, ReportError> {
        let path = self.dir.join(name);

        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
        .map_err(|e| ReportError::Serialize {
            path: path.clone(),
            source: e,
        })?;
        bytes.push(b'\n');

        let mut tmp = NamedTempFile::new_in(self.dir).map_err(|e| ReportError::write(&path, e))?;
        tmp.write_all(&bytes)
            .map_err(|e| ReportError::write(&path, e))?;
        tmp.persist(&path)
            .map_err(|e| ReportError::write(&path, e.error))?;

        Ok(path)
    }
}
