use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::commands::lookup::dispatch::Event;

/// Interval between spinner frames while a fetch is pending.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Key event with code and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

#[cfg(test)]
impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Events that can occur in the TUI.
pub enum AppEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// A fetch finished; the payload goes straight to the dispatcher.
    Resolved(Event),
    /// Tick for spinner animation.
    Tick,
}

impl From<Event> for AppEvent {
    fn from(event: Event) -> Self {
        Self::Resolved(event)
    }
}

/// Event handler that merges keyboard input, ticks and fetch resolutions
/// into one channel consumed by the UI loop.
pub struct EventHandler {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventHandler {
    /// Creates a new event handler.
    /// Spawns background threads for keyboard input and ticks.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        let key_tx = tx.clone();
        thread::spawn(move || {
            handle_keyboard_events(key_tx);
        });

        let tick_tx = tx.clone();
        thread::spawn(move || {
            handle_tick_events(tick_tx);
        });

        Self {
            sender: tx,
            receiver: rx,
        }
    }

    /// Sender for producers outside this module (the effect runner).
    pub fn sender(&self) -> Sender<AppEvent> {
        self.sender.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<AppEvent> {
        self.receiver
            .recv()
            .map_err(|e| anyhow::anyhow!("Event channel closed: {}", e))
    }
}

/// Handles keyboard events in a background thread.
fn handle_keyboard_events(tx: Sender<AppEvent>) {
    loop {
        if event::poll(Duration::from_millis(50)).unwrap_or(false)
            && let Ok(TermEvent::Key(key)) = event::read()
            && key.kind == KeyEventKind::Press
        {
            if tx
                .send(AppEvent::Key(KeyEvent::new(key.code, key.modifiers)))
                .is_err()
            {
                // Channel closed, exit thread
                break;
            }
        }
    }
}

/// Handles tick events for the loading spinner.
fn handle_tick_events(tx: Sender<AppEvent>) {
    loop {
        thread::sleep(TICK_INTERVAL);
        if tx.send(AppEvent::Tick).is_err() {
            break;
        }
    }
}
