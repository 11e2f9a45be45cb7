use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Key(KeyCode),
    Resize,
}

impl InputEvent {
    /// Whether this event ends the frame loop.
    pub fn is_exit(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::Key(KeyCode::Esc))
    }
}

/// Yields the input that arrived since the previous poll.
pub trait EventSource {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Non-blocking reader over crossterm's event queue.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = translate(event::read()?) {
                events.push(ev);
            }
        }
        Ok(events)
    }
}

/// Map a crossterm event onto the loop's vocabulary.
///
/// Raw mode swallows SIGINT, so Ctrl-C arrives as a key and is turned into
/// `Quit` here.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                Some(InputEvent::Quit)
            } else {
                Some(InputEvent::Key(key.code))
            }
        }
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}
