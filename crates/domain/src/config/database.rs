use serde::{Deserialize, Serialize};

/// SQLite graph sink configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file (default: "./reconflux.db")
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Write facts to the SQLite sink (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum pooled connections (default: 4)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        if self.path.starts_with("sqlite:") {
            self.path.clone()
        } else {
            format!("sqlite://{}", self.path)
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            enabled: true,
            max_connections: default_max_connections(),
        }
    }
}

fn default_db_path() -> String {
    "./reconflux.db".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_connections() -> u32 {
    4
}
