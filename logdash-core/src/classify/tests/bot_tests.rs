use crate::classify::is_bot;

#[test]
fn googlebot_is_a_bot() {
    assert!(is_bot("Mozilla/5.0 (compatible; Googlebot/2.1)"));
}

#[test]
fn dash_and_empty_are_never_bots() {
    assert!(!is_bot("-"));
    assert!(!is_bot(""));
}

#[test]
fn browser_is_not_a_bot() {
    assert!(!is_bot(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
    ));
    assert!(!is_bot("Mozilla/5.0"));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(is_bot("SomeSPIDER/1.0"));
    assert!(is_bot("CURL/8.1.2"));
}

#[test]
fn command_line_clients_and_ai_crawlers_are_bots() {
    // Arrange
    let agents = [
        "curl/7.68.0",
        "Wget/1.21.2",
        "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko; compatible; GPTBot/1.0; +https://openai.com/gptbot)",
        "ClaudeBot/1.0; +claudebot@anthropic.com",
        "Mozilla/5.0 (compatible; YandexBot/3.0)",
        "Pingdom.com_bot_version_1.4",
    ];

    // Act / Assert
    for ua in agents {
        assert!(is_bot(ua), "expected bot: {ua}");
    }
}
