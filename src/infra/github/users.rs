//! User profile and repository listing operations.

use super::client::{ReqwestClient, encode_segment};
use super::error::Result;
use super::models::{Repository, UserProfile};

/// Fixed page size for repository listings. Only the first page is fetched.
pub const REPOS_PER_PAGE: u32 = 100;

/// Trait for the read-only user endpoints.
#[async_trait::async_trait]
pub trait UserClient: Send + Sync {
    /// Fetch the profile for `username`.
    async fn fetch_user(&self, username: &str) -> Result<UserProfile>;

    /// Fetch the first page of public repositories owned by `login`,
    /// in the order GitHub returns them.
    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>>;
}

#[async_trait::async_trait]
impl UserClient for ReqwestClient {
    async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let url = self.url(&format!("/users/{}", encode_segment(username)))?;
        self.get_json(url).await
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>> {
        let url = self.url(&format!(
            "/users/{}/repos?per_page={REPOS_PER_PAGE}",
            encode_segment(login)
        ))?;
        self.get_json(url).await
    }
}
