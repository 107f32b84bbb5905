//! Event dispatcher for the lookup screen.
//!
//! `Store::dispatch` is the only place `ApplicationState` changes. It never
//! performs I/O: network work is returned as an `Effect` for a runner to
//! execute, and the outcome comes back later as a resolution `Event`.

use crate::infra::github::{FetchError, Repository, UserProfile};

use super::state::{ApplicationState, RequestState, RequestToken};

/// Inputs to the dispatcher: user intents and fetch resolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    UsernameInputChanged(String),
    FilterInputChanged(String),
    SubmitRequested,
    ProfileFetchResolved {
        token: RequestToken,
        result: Result<UserProfile, FetchError>,
    },
    RepoFetchResolved {
        token: RequestToken,
        result: Result<Vec<Repository>, FetchError>,
    },
    ResetRequested,
}

/// A network call the dispatcher wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchProfile {
        token: RequestToken,
        username: String,
    },
    FetchRepositories {
        token: RequestToken,
        login: String,
    },
}

impl Effect {
    pub fn token(&self) -> RequestToken {
        match self {
            Self::FetchProfile { token, .. } | Self::FetchRepositories { token, .. } => *token,
        }
    }
}

/// Exclusive owner of the application state.
///
/// The token counter outlives resets, so a response to a request abandoned
/// before a reset can never match a request issued after it.
#[derive(Debug, Default)]
pub struct Store {
    state: ApplicationState,
    last_token: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Apply `event` and return the effect it requests, if any.
    pub fn dispatch(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::UsernameInputChanged(text) => {
                self.state.username_input = text;
                None
            }
            Event::FilterInputChanged(text) => {
                self.state.filter_input = text;
                None
            }
            Event::SubmitRequested => self.submit(),
            Event::ProfileFetchResolved { token, result } => self.resolve_profile(token, result),
            Event::RepoFetchResolved { token, result } => {
                self.resolve_repositories(token, result);
                None
            }
            Event::ResetRequested => {
                tracing::debug!("reset");
                self.state = ApplicationState::default();
                None
            }
        }
    }

    fn next_token(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    fn submit(&mut self) -> Option<Effect> {
        let username = self.state.username_input.trim();
        if username.is_empty() {
            return None;
        }

        // Settled lookups stay on screen until an explicit reset.
        if !(self.state.profile.is_idle() || self.state.profile.is_pending()) {
            tracing::debug!("submit ignored, profile already settled");
            return None;
        }

        let username = username.to_string();
        let token = self.next_token();
        self.state.profile = RequestState::Pending(token);
        tracing::debug!(?token, %username, "fetch profile");
        Some(Effect::FetchProfile { token, username })
    }

    fn resolve_profile(
        &mut self,
        token: RequestToken,
        result: Result<UserProfile, FetchError>,
    ) -> Option<Effect> {
        if !self.state.profile.awaits(token) {
            tracing::debug!(?token, "dropping stale profile response");
            return None;
        }

        match result {
            Ok(profile) => {
                let login = profile.login.clone();
                let repo_token = self.next_token();
                self.state.profile = RequestState::Ready(profile);
                self.state.repositories = RequestState::Pending(repo_token);
                tracing::debug!(token = ?repo_token, %login, "fetch repositories");
                Some(Effect::FetchRepositories {
                    token: repo_token,
                    login,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed");
                self.state.profile = RequestState::Failed(err);
                None
            }
        }
    }

    fn resolve_repositories(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Repository>, FetchError>,
    ) {
        if !self.state.repositories.awaits(token) {
            tracing::debug!(?token, "dropping stale repository response");
            return;
        }

        if let Err(err) = &result {
            tracing::warn!(error = %err, "repository fetch failed");
        }
        self.state.repositories = RequestState::resolve(result);
    }
}
