//! GitHub REST API client module using reqwest.
//!
//! Provides `ReqwestClient` for the unauthenticated, read-only user endpoints
//! the lookup screen needs.

mod client;
pub(crate) mod error;
#[cfg(test)]
mod mock;
mod models;
mod users;

pub use client::{DEFAULT_BASE_URL, ReqwestClient};
pub use error::FetchError;
#[cfg(test)]
pub use mock::GitHubMockServer;
pub use models::{Repository, UserProfile};
pub use users::UserClient;
