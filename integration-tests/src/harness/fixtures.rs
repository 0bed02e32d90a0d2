use flate2::Compression;
use flate2::write::GzEncoder;
use logdash_core::conf::{LoadedConfig, Overrides, RunSettings, load_config};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Renders one combined-format access log line.
pub fn access_line(
    ip: &str,
    ts: &str,
    method: &str,
    path: &str,
    status: u32,
    bytes: u64,
    ua: &str,
) -> String {
    format!(r#"{ip} - - [{ts}] "{method} {path} HTTP/1.1" {status} {bytes} "-" "{ua}""#)
}

/// A small day of mixed traffic: 6 valid lines, 1 garbage line, 1 blank.
pub fn sample_day() -> Vec<String> {
    const FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:118.0) Gecko/20100101 Firefox/118.0";
    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const GOOGLEBOT: &str =
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

    let at = |time: &str| format!("10/Oct/2023:{time} +0000");

    vec![
        access_line("192.168.1.10", &at("08:01:00"), "GET", "/index.html", 200, 2048, FIREFOX),
        access_line("192.168.1.10", &at("08:01:01"), "GET", "/static/app.js", 200, 1024, FIREFOX),
        access_line("8.8.8.8", &at("08:30:00"), "GET", "/index.html", 200, 2048, IPHONE),
        access_line("66.249.66.1", &at("09:00:00"), "GET", "/robots.txt", 404, 0, GOOGLEBOT),
        "this is not an access log line".to_string(),
        String::new(),
        access_line("127.0.0.1", &at("09:15:00"), "POST", "/api/login", 500, 512, "curl/8.4.0"),
        access_line("8.8.8.8", &at("09:20:00"), "GET", "/index.html", 304, 0, IPHONE),
    ]
}

/// A temporary working directory holding access logs and a config file.
pub struct LogFixture {
    dir: TempDir,
}

impl LogFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create fixture dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_plain(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.prepare(name);
        fs::write(&path, join(lines)).expect("failed to write plain log");
        path
    }

    pub fn write_gzip(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.prepare(name);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(join(lines).as_bytes())
            .expect("failed to compress log");
        fs::write(&path, encoder.finish().expect("failed to finish gzip"))
            .expect("failed to write gzip log");
        path
    }

    pub fn append(&self, name: &str, lines: &[String]) {
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(self.root().join(name))
            .expect("failed to open log for append");
        file.write_all(join(lines).as_bytes())
            .expect("failed to append log");
    }

    /// Writes `logdash.hcl` and loads it.
    pub fn config(&self, body: &str) -> LoadedConfig {
        let path = self.root().join("logdash.hcl");
        fs::write(&path, body).expect("failed to write config");
        load_config(&path).expect("fixture config should load")
    }

    pub fn settings(&self, body: &str) -> RunSettings {
        RunSettings::merge(self.config(body), &Overrides::default())
            .expect("fixture settings should merge")
    }

    pub fn read_json(&self, relative: impl AsRef<Path>) -> Value {
        let body = fs::read_to_string(self.root().join(relative)).expect("failed to read artifact");
        serde_json::from_str(&body).expect("artifact is not valid JSON")
    }

    fn prepare(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create log dir");
        }
        path
    }
}

impl Default for LogFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn join(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}
