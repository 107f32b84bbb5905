use std::path::PathBuf;

const APP_DIR: &str = "ghlookup";

/// Returns the user's home directory from the HOME environment variable.
fn home_dir() -> Option<PathBuf> {
    non_empty_env("HOME").map(PathBuf::from)
}

/// Returns the XDG config directory (~/.config or $XDG_CONFIG_HOME).
/// Empty values are treated as unset per XDG Base Directory Specification.
pub fn config_dir() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Directory holding the ghlookup log file (`$XDG_CACHE_HOME/ghlookup`).
pub fn log_dir() -> Option<PathBuf> {
    xdg_dir("XDG_CACHE_HOME", ".cache").map(|dir| dir.join(APP_DIR))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = non_empty_env(var) {
        return Some(PathBuf::from(xdg));
    }
    home_dir().map(|home| home.join(home_fallback))
}

/// Returns the value of an environment variable, treating empty strings as unset.
fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
