//! Centralized reader for GHLOOKUP_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const API_URL: &str = "GHLOOKUP_API_URL";
const LOG: &str = "GHLOOKUP_LOG";

/// Snapshot of all GHLOOKUP_* environment variables at load time.
#[derive(Debug)]
pub struct EnvVars {
    /// Overrides `api.base_url` from the config file.
    pub api_url: Option<String>,

    /// Overrides `log.level` from the config file.
    pub log: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all GHLOOKUP_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            api_url: non_empty_var(API_URL),
            log: non_empty_var(LOG),
        }
    }
}
