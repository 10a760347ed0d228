use serde::{Deserialize, Serialize};

/// Enumeration scope for the current run
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScopeConfig {
    /// Root domains the run may expand into
    #[serde(default)]
    pub domains: Vec<String>,

    /// Names (and everything below them) that are never in scope
    #[serde(default)]
    pub excluded: Vec<String>,

    /// Fixed run identifier; generated at startup when absent
    #[serde(default)]
    pub run_id: Option<String>,
}
