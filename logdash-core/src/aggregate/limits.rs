use serde::{Deserialize, Serialize};

/// Per-category top-K sizes used when taking a snapshot.
///
/// The defaults are what downstream report consumers expect; changing them
/// changes the length of the published rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TopKLimits {
    pub ips: usize,
    pub endpoints: usize,
    pub user_agents: usize,
    pub referrers: usize,
    pub file_types: usize,
    pub error_paths: usize,
    pub methods: usize,
}

impl Default for TopKLimits {
    fn default() -> Self {
        Self {
            ips: 50,
            endpoints: 50,
            user_agents: 20,
            referrers: 20,
            file_types: 20,
            error_paths: 20,
            methods: 10,
        }
    }
}

impl TopKLimits {
    /// The same K for every category.
    pub fn uniform(k: usize) -> Self {
        Self {
            ips: k,
            endpoints: k,
            user_agents: k,
            referrers: k,
            file_types: k,
            error_paths: k,
            methods: k,
        }
    }

    /// Name and value of every limit, for validation and reporting.
    pub fn entries(&self) -> [(&'static str, usize); 7] {
        [
            ("ips", self.ips),
            ("endpoints", self.endpoints),
            ("user_agents", self.user_agents),
            ("referrers", self.referrers),
            ("file_types", self.file_types),
            ("error_paths", self.error_paths),
            ("methods", self.methods),
        ]
    }
}
