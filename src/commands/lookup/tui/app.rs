use ratatui::widgets::ListState;

use crate::commands::lookup::dispatch::{Effect, Event, Store};
use crate::commands::lookup::state::ApplicationState;
use crate::infra::github::Repository;

/// Which text input receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Filter,
}

/// Application state for the TUI.
///
/// Lookup state lives in the `Store`; everything else here is view state
/// (focus, list selection, spinner) that the dispatcher never sees.
pub struct App {
    store: Store,
    /// Input currently being edited.
    pub focus: Focus,
    /// Selection within the visible (filtered) repository list.
    pub list_state: ListState,
    /// Whether the application should quit.
    pub should_quit: bool,
    /// Error message to display (cleared on next action).
    pub error_message: Option<String>,
    /// Current spinner frame, advanced on every tick.
    pub spinner_frame: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            focus: Focus::Username,
            list_state: ListState::default(),
            should_quit: false,
            error_message: None,
            spinner_frame: 0,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        self.store.state()
    }

    /// Lookup state and the list selection, borrowed together for rendering.
    pub fn view_parts(&mut self) -> (&ApplicationState, &mut ListState) {
        (self.store.state(), &mut self.list_state)
    }

    /// Fill in the username and submit it, as `ghl view <USERNAME>` does.
    pub fn submit_username(&mut self, username: String) -> Option<Effect> {
        self.dispatch(Event::UsernameInputChanged(username));
        self.dispatch(Event::SubmitRequested)
    }

    /// Forward `event` to the store and keep the list selection in range.
    pub fn dispatch(&mut self, event: Event) -> Option<Effect> {
        let reselect = matches!(
            event,
            Event::FilterInputChanged(_) | Event::RepoFetchResolved { .. } | Event::ResetRequested
        );
        let is_reset = matches!(event, Event::ResetRequested);

        let effect = self.store.dispatch(event);

        if is_reset {
            self.focus = Focus::Username;
        }
        if reselect {
            self.select_first();
        } else {
            self.clamp_selection();
        }
        effect
    }

    /// Append a character to the focused input.
    pub fn push_char(&mut self, c: char) -> Option<Effect> {
        let mut text = self.focused_text().to_string();
        text.push(c);
        self.set_focused_text(text)
    }

    /// Remove the last character of the focused input.
    pub fn pop_char(&mut self) -> Option<Effect> {
        let mut text = self.focused_text().to_string();
        text.pop()?;
        self.set_focused_text(text)
    }

    fn focused_text(&self) -> &str {
        match self.focus {
            Focus::Username => &self.state().username_input,
            Focus::Filter => &self.state().filter_input,
        }
    }

    fn set_focused_text(&mut self, text: String) -> Option<Effect> {
        let event = match self.focus {
            Focus::Username => Event::UsernameInputChanged(text),
            Focus::Filter => Event::FilterInputChanged(text),
        };
        self.dispatch(event)
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Username => Focus::Filter,
            Focus::Filter => Focus::Username,
        };
    }

    fn visible_len(&self) -> usize {
        self.state().visible_repositories().len()
    }

    fn select_first(&mut self) {
        let selected = (self.visible_len() > 0).then_some(0);
        self.list_state.select(selected);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// Moves selection to the next visible repository (wraps).
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection to the previous visible repository (wraps).
    pub fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected repository, if any.
    pub fn selected_repository(&self) -> Option<&Repository> {
        let i = self.list_state.selected()?;
        self.state().visible_repositories().get(i).copied()
    }

    /// URL to open in the browser: the selected repository, else the profile.
    pub fn selected_url(&self) -> Option<String> {
        if let Some(repo) = self.selected_repository() {
            return Some(repo.html_url.clone());
        }
        self.state()
            .profile
            .ready()
            .map(|p| p.html_url.clone())
            .filter(|url| !url.is_empty())
    }

    /// Advances the spinner.
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Signals that the application should quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sets an error message to display.
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Clears the error message.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::commands::lookup::state::RequestToken;
    use crate::infra::github::UserProfile;

    pub(in crate::commands::lookup::tui) fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            html_url: format!("https://github.com/octocat/{name}"),
            description: format!("{name} description"),
            stargazers_count: 3,
            watchers_count: 3,
            forks_count: 1,
            language: "Rust".to_string(),
        }
    }

    pub(in crate::commands::lookup::tui) fn profile(login: &str) -> UserProfile {
        UserProfile {
            login: login.to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
            html_url: format!("https://github.com/{login}"),
            name: "The Octocat".to_string(),
            bio: "Mascot".to_string(),
            location: "San Francisco".to_string(),
            public_repos: 3,
            followers: 10,
            following: 2,
            ..Default::default()
        }
    }

    /// App with `login` submitted and resolved; returns the repository token.
    pub(in crate::commands::lookup::tui) fn app_with_profile(login: &str) -> (App, RequestToken) {
        let mut app = App::new();
        app.dispatch(Event::UsernameInputChanged(login.to_string()));
        let token = app.dispatch(Event::SubmitRequested).unwrap().token();
        let repo_token = app
            .dispatch(Event::ProfileFetchResolved {
                token,
                result: Ok(profile(login)),
            })
            .unwrap()
            .token();
        (app, repo_token)
    }

    /// App showing `names` as the repository list.
    pub(in crate::commands::lookup::tui) fn app_with_repos(names: &[&str]) -> App {
        let (mut app, token) = app_with_profile("octocat");
        app.dispatch(Event::RepoFetchResolved {
            token,
            result: Ok(names.iter().map(|n| repo(n)).collect()),
        });
        app
    }

    #[test]
    fn test_new_app_is_idle() {
        let app = App::new();

        assert_eq!(app.focus, Focus::Username);
        assert!(app.state().profile.is_idle());
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn test_push_and_pop_edit_focused_input() {
        let mut app = App::new();

        app.push_char('o');
        app.push_char('c');
        assert_eq!(app.state().username_input, "oc");

        app.toggle_focus();
        app.push_char('x');
        assert_eq!(app.state().filter_input, "x");
        assert_eq!(app.state().username_input, "oc");

        app.pop_char();
        app.pop_char();
        assert_eq!(app.state().filter_input, "");
    }

    #[test]
    fn test_repositories_arrival_selects_first() {
        let app = app_with_repos(&["a", "b"]);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_select_next_wraps() {
        let mut app = app_with_repos(&["a", "b"]);
        app.list_state.select(Some(1));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_select_previous_wraps() {
        let mut app = app_with_repos(&["a", "b"]);

        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn test_select_next_empty() {
        let mut app = App::new();

        app.select_next();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn test_filter_change_reselects_within_visible() {
        let mut app = app_with_repos(&["alpha-tools", "beta", "alpha-cli"]);
        app.list_state.select(Some(2));

        app.dispatch(Event::FilterInputChanged("beta".to_string()));

        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(
            app.selected_repository().map(|r| r.name.as_str()),
            Some("beta")
        );
    }

    #[test]
    fn test_filter_without_matches_clears_selection() {
        let mut app = app_with_repos(&["alpha", "beta"]);

        app.dispatch(Event::FilterInputChanged("zzz".to_string()));

        assert!(app.list_state.selected().is_none());
        assert!(app.selected_repository().is_none());
    }

    #[test]
    fn test_selected_url_prefers_repository() {
        let app = app_with_repos(&["hello-world"]);
        assert_eq!(
            app.selected_url().as_deref(),
            Some("https://github.com/octocat/hello-world")
        );
    }

    #[test]
    fn test_selected_url_falls_back_to_profile() {
        let (app, _) = app_with_profile("octocat");
        assert_eq!(
            app.selected_url().as_deref(),
            Some("https://github.com/octocat")
        );
    }

    #[test]
    fn test_reset_restores_focus_and_selection() {
        let mut app = app_with_repos(&["a"]);
        app.toggle_focus();

        app.dispatch(Event::ResetRequested);

        assert_eq!(app.focus, Focus::Username);
        assert!(app.list_state.selected().is_none());
        assert_eq!(app.state(), &ApplicationState::default());
    }

    #[test]
    fn test_submit_username_requests_profile() {
        let mut app = App::new();

        let effect = app.submit_username("octocat".to_string());

        let Some(Effect::FetchProfile { username, .. }) = effect else {
            panic!("expected profile fetch");
        };
        assert_eq!(username, "octocat");
        assert_eq!(app.state().username_input, "octocat");
        assert!(app.state().profile.is_pending());
    }

    #[test]
    fn test_submit_blank_username_stays_idle() {
        let mut app = App::new();

        assert_eq!(app.submit_username("  ".to_string()), None);
        assert!(app.state().profile.is_idle());
    }

    #[test]
    fn test_view_parts_exposes_selection() {
        let mut app = app_with_repos(&["a", "b"]);

        let (state, list_state) = app.view_parts();
        list_state.select(Some(1));
        assert_eq!(state.visible_repositories().len(), 2);

        assert_eq!(
            app.selected_repository().map(|r| r.name.as_str()),
            Some("b")
        );
    }

    #[test]
    fn test_error_message() {
        let mut app = App::new();

        app.set_error("Test error".to_string());
        assert_eq!(app.error_message, Some("Test error".to_string()));

        app.clear_error();
        assert!(app.error_message.is_none());
    }
}
