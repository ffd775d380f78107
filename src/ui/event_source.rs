use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            let mapped = match key.code {
                KeyCode::Char('c') if ctrl => return Ok(Some(AppEvent::QuitRequested)),
                KeyCode::Esc => return Ok(Some(AppEvent::QuitRequested)),
                KeyCode::Enter => Some(KeyInput::new("enter", ctrl)),
                KeyCode::Backspace => Some(KeyInput::new("backspace", ctrl)),
                KeyCode::Delete => Some(KeyInput::new("delete", ctrl)),
                KeyCode::Left => Some(KeyInput::new("left", ctrl)),
                KeyCode::Right => Some(KeyInput::new("right", ctrl)),
                KeyCode::Home => Some(KeyInput::new("home", ctrl)),
                KeyCode::End => Some(KeyInput::new("end", ctrl)),
                KeyCode::Char(ch) => Some(KeyInput::new(ch.to_string(), ctrl)),
                _ => None,
            };

            return Ok(mapped.map(AppEvent::InputKey));
        }

        Ok(None)
    }
}

/// Drains reply events pushed by pump tasks over the channel.
pub struct ChannelReplyEventSource {
    receiver: Receiver<AppEvent>,
}

impl ChannelReplyEventSource {
    pub fn new(receiver: Receiver<AppEvent>) -> Self {
        Self { receiver }
    }
}

impl AppEventSource for ChannelReplyEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => Ok(None),
        }
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
