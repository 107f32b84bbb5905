mod app;
mod event;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::runtime::Handle;

use crate::commands::lookup::dispatch::{Effect, Event};
use crate::commands::lookup::runner::EffectRunner;
use crate::infra::github::UserClient;

use self::app::{App, Focus};
use self::event::{AppEvent, EventHandler, KeyEvent};

/// Side work requested by a key press that the loop has to carry out.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Effect),
    Open(String),
}

/// Runs the interactive lookup UI.
///
/// `initial_username` pre-fills the username input and submits it right away.
pub fn run(
    initial_username: Option<String>,
    client: Arc<dyn UserClient>,
    handle: Handle,
) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, initial_username, client, handle);
    ratatui::restore();
    result
}

/// Main application loop.
fn run_app(
    terminal: &mut DefaultTerminal,
    initial_username: Option<String>,
    client: Arc<dyn UserClient>,
    handle: Handle,
) -> Result<()> {
    let mut app = App::new();
    let event_handler = EventHandler::new();
    let runner = EffectRunner::new(client, handle, event_handler.sender());

    if let Some(effect) = initial_username.and_then(|username| app.submit_username(username)) {
        runner.run(effect);
    }

    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match handle_key_event(&mut app, key) {
                Some(Command::Run(effect)) => runner.run(effect),
                Some(Command::Open(url)) => {
                    tracing::debug!(%url, "opening in browser");
                    if let Err(e) = open::that(&url) {
                        app.set_error(format!("Failed to open {url}: {e}"));
                    }
                }
                None => {}
            },
            AppEvent::Resolved(event) => {
                if let Some(effect) = app.dispatch(event) {
                    runner.run(effect);
                }
            }
            AppEvent::Tick => app.tick(),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handles key events.
fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Command> {
    app.clear_error();

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            app.quit();
            None
        }
        KeyCode::Char('c') if ctrl => {
            app.quit();
            None
        }
        KeyCode::Char('r') if ctrl => {
            app.dispatch(Event::ResetRequested);
            None
        }
        KeyCode::Char('o') if ctrl => match app.selected_url() {
            Some(url) => Some(Command::Open(url)),
            None => {
                app.set_error("Nothing to open yet".to_string());
                None
            }
        },

        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            None
        }
        KeyCode::Enter if app.focus == Focus::Username => {
            app.dispatch(Event::SubmitRequested).map(Command::Run)
        }

        KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Up => {
            app.select_previous();
            None
        }

        KeyCode::Backspace => app.pop_char().map(Command::Run),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.push_char(c).map(Command::Run)
        }

        _ => None,
    }
}
