//! Wire models for the GitHub REST endpoints used by the lookup screen.

use serde::{Deserialize, Deserializer};

/// A GitHub user profile from `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UserProfile {
    /// Canonical login as echoed back by GitHub (case may differ from input).
    pub login: String,
    pub avatar_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub blog: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

impl UserProfile {
    /// Name to show in headings: the display name, or the login when unset.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.login
        } else {
            &self.name
        }
    }
}

/// A repository entry from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub stargazers_count: u64,
    pub watchers_count: u64,
    pub forks_count: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
}

/// GitHub sends `null` for unset optional strings; treat it like an absent key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
