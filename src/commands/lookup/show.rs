//! Non-interactive lookup: fetch once, print, exit.

use std::fmt::Write as _;
use std::io::IsTerminal;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use crate::infra::github::{ReqwestClient, UserClient};
use crate::shared::config::Config;

use super::dispatch::{Event, Store};
use super::runner::drive;
use super::state::{ApplicationState, RequestState};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct ShowArgs {
    /// GitHub username to look up
    pub username: String,

    /// Only list repositories whose name contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub filter: String,
}

#[tokio::main]
pub async fn run(args: &ShowArgs, config: &Config) -> anyhow::Result<()> {
    let client = ReqwestClient::new(&config.api.base_url, config.api.timeout())?;

    let spinner = if std::io::stderr().is_terminal() {
        let s = ProgressBar::new_spinner();
        #[expect(clippy::expect_used, reason = "static template string")]
        s.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                .template("{spinner} {msg}")
                .expect("valid template"),
        );
        s.set_message(format!("Looking up {}...", args.username.trim()));
        s.enable_steady_tick(std::time::Duration::from_millis(80));
        s
    } else {
        ProgressBar::hidden()
    };

    let state = lookup(args, &client).await;

    spinner.finish_and_clear();

    print!("{}", format_state(&state));

    check_outcome(&state, &args.username)
}

/// Turn a settled state into the command's exit status.
fn check_outcome(state: &ApplicationState, username: &str) -> anyhow::Result<()> {
    if state.profile.is_idle() {
        anyhow::bail!("username must not be empty");
    }
    if let Some(err) = state.profile.failed().or(state.repositories.failed()) {
        anyhow::bail!("lookup of {} failed: {err}", username.trim());
    }
    Ok(())
}

/// Run the full submit flow for `args` and return the settled state.
pub(super) async fn lookup(args: &ShowArgs, client: &dyn UserClient) -> ApplicationState {
    let mut store = Store::new();
    store.dispatch(Event::UsernameInputChanged(args.username.clone()));
    store.dispatch(Event::FilterInputChanged(args.filter.clone()));
    drive(&mut store, client, Event::SubmitRequested).await;
    store.state().clone()
}

/// Render a settled state as plain text.
pub(super) fn format_state(state: &ApplicationState) -> String {
    let mut out = String::new();

    match &state.profile {
        RequestState::Ready(profile) => {
            let _ = writeln!(out, "{} (@{})", profile.display_name(), profile.login);
            for (label, value) in [
                ("Bio", &profile.bio),
                ("Company", &profile.company),
                ("Location", &profile.location),
                ("Blog", &profile.blog),
                ("Profile", &profile.html_url),
                ("Avatar", &profile.avatar_url),
            ] {
                if !value.is_empty() {
                    let _ = writeln!(out, "{label}: {value}");
                }
            }
            let _ = writeln!(
                out,
                "Followers: {}  Following: {}  Public repos: {}",
                profile.followers, profile.following, profile.public_repos
            );
        }
        RequestState::Failed(err) => {
            let _ = writeln!(out, "Error: {err}");
            return out;
        }
        RequestState::Idle | RequestState::Pending(_) => return out,
    }

    out.push('\n');
    match &state.repositories {
        RequestState::Ready(repos) => {
            let visible = state.visible_repositories();
            let _ = writeln!(out, "Repositories ({}/{})", visible.len(), repos.len());
            if visible.is_empty() {
                let _ = writeln!(out, "  (none)");
            }
            for repo in visible {
                let _ = write!(
                    out,
                    "  {}  ★ {}  forks {}  watchers {}",
                    repo.name, repo.stargazers_count, repo.forks_count, repo.watchers_count
                );
                if !repo.language.is_empty() {
                    let _ = write!(out, "  [{}]", repo.language);
                }
                out.push('\n');
                if !repo.description.is_empty() {
                    let _ = writeln!(out, "      {}", repo.description);
                }
            }
        }
        RequestState::Failed(err) => {
            let _ = writeln!(out, "Repositories: Error: {err}");
        }
        RequestState::Idle | RequestState::Pending(_) => {}
    }

    out
}
