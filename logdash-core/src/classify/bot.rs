/// Lower-case user-agent fragments that mark automated clients.
///
/// Matching is "any signature is a substring", so overlapping entries such
/// as `bot` and `googlebot` are harmless.
pub const BOT_SIGNATURES: &[&str] = &[
    // generic
    "bot",
    "spider",
    "crawl",
    "slurp",
    "scraper",
    "fetcher",
    "archiver",
    "validator",
    "scanner",
    "monitor",
    "health-check",
    "http-client",
    "https-client",
    "curl",
    "wget",
    "pingdom",
    "baidu",
    // named crawlers
    "googlebot",
    "bingbot",
    "yandexbot",
    "duckduckbot",
    "gptbot",
    "claudebot",
    "anthropic",
    "openai",
];

/// Returns true when the user agent matches any known bot signature.
/// An empty or `-` user agent is never a bot.
pub fn is_bot(user_agent: &str) -> bool {
    if user_agent.is_empty() || user_agent == "-" {
        return false;
    }

    let ua = user_agent.to_lowercase();
    BOT_SIGNATURES.iter().any(|signature| ua.contains(signature))
}
