use serde::{Deserialize, Serialize};
use woothee::parser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
    Bot,
    Unknown,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Bot => "bot",
            DeviceType::Unknown => "unknown",
        }
    }
}

/// Maps user agents onto a coarse device family using woothee.
pub struct DeviceClassifier {
    parser: Parser,
}

impl DeviceClassifier {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn classify(&self, user_agent: &str) -> DeviceType {
        if user_agent.is_empty() || user_agent == "-" {
            return DeviceType::Unknown;
        }

        let Some(result) = self.parser.parse(user_agent) else {
            return DeviceType::Unknown;
        };

        match result.category {
            "pc" => DeviceType::Desktop,
            "smartphone" | "mobilephone" => DeviceType::Mobile,
            "tablet" => DeviceType::Tablet,
            "crawler" => DeviceType::Bot,
            _ => DeviceType::Unknown,
        }
    }
}

impl Default for DeviceClassifier {
    fn default() -> Self {
        Self::new()
    }
}
