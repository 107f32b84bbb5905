use crate::infra::github::{FetchError, Repository, UserProfile};

use super::filter;

/// Identifies one issued fetch. A resolution is applied only while its slot
/// is still waiting on the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

/// Lifecycle of a single asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending(RequestToken),
    Failed(FetchError),
    Ready(T),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Whether a resolution carrying `token` belongs to this slot.
    pub fn awaits(&self, token: RequestToken) -> bool {
        matches!(self, Self::Pending(pending) if *pending == token)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failed(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Settle a fetch outcome into `Ready` or `Failed`.
    pub fn resolve(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Everything the lookup screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationState {
    pub username_input: String,
    pub filter_input: String,
    pub profile: RequestState<UserProfile>,
    pub repositories: RequestState<Vec<Repository>>,
}

impl ApplicationState {
    /// Repositories whose name matches the live filter, in upstream order.
    /// Empty unless the repository slot is `Ready`.
    pub fn visible_repositories(&self) -> Vec<&Repository> {
        self.repositories
            .ready()
            .map(|repos| filter::filter_repositories(&self.filter_input, repos))
            .unwrap_or_default()
    }
}
