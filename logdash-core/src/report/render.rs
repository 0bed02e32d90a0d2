use crate::aggregate::Statistics;
use owo_colors::OwoColorize;
use std::fmt::Write;

pub const SUMMARY_TOP_ENDPOINTS: usize = 5;

/// Human-readable run summary for the terminal.
pub fn render_summary(stats: &Statistics) -> String {
    let mut out = String::new();
    let classes = &stats.status_classes;

    let _ = writeln!(out, "{}", "Access log summary".bold());
    let _ = writeln!(out, "==================");
    let _ = writeln!(out, "Total requests: {}", stats.total_requests);
    let _ = writeln!(out, "Unique IPs: {}", stats.unique_ips);
    let _ = writeln!(out, "Transferred: {:.2} MB", stats.total_transferred_mb);
    let _ = writeln!(
        out,
        "Bots: {} ({:.1}%)",
        stats.bot_user.bot_requests, stats.bot_user.bot_percentage
    );

    let _ = writeln!(out, "\n{}", "Status distribution".bold());
    let rows = [
        ("2xx", classes.counts.success, classes.success_percentage),
        ("3xx", classes.counts.redirect, classes.redirect_percentage),
        ("4xx", classes.counts.client_error, classes.client_error_percentage),
        ("5xx", classes.counts.server_error, classes.server_error_percentage),
    ];
    for (label, count, pct) in rows {
        let _ = writeln!(out, "  {label:<4} {count:>10} {pct:>6.1}%");
    }

    let _ = writeln!(out, "\n{}", "Top endpoints".bold());
    if stats.top_endpoints.is_empty() {
        let _ = writeln!(out, "  <no requests>");
    }
    for (rank, endpoint) in stats
        .top_endpoints
        .iter()
        .take(SUMMARY_TOP_ENDPOINTS)
        .enumerate()
    {
        let _ = writeln!(
            out,
            "  {}. {} ({})",
            rank + 1,
            endpoint.name,
            endpoint.count
        );
    }

    out
}
