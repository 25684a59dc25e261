// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching the corresponding
//! application event when typing is finished and a command is submitted.
//!
//! Parsing is kept separate from dispatch so that every command, and every
//! way of getting one wrong, can be exercised without a terminal.

use std::{path::PathBuf, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    MainView,
    events::AppEvent,
    model::{Category, listview::FileAction},
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Show(MainView),
    Find(String),
    ClearSearch,
    Page(usize),
    Favourite,
    Delete,
    Rename(String),
    Upload(PathBuf),
    SetUserName(String),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: :{0}")]
    MissingArgument(&'static str),

    #[error("Unknown category: {0} (expected pictures, documents, videos or audio)")]
    UnknownCategory(String),

    #[error("Not a page number: {0}")]
    InvalidPage(String),
}

/// Parses the text typed on the command line, without the leading `:`.
///
/// Returns `Ok(None)` for a blank line.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<Command>, CommandError> {
    let buffer = buffer.trim();
    let (name, rest) = match buffer.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (buffer, ""),
    };

    let required = |usage: &'static str| {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(usage))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match name {
        "" => return Ok(None),

        "q" | "quit" => Command::Quit,

        "home" => Command::Show(MainView::Dashboard),
        "favs" => Command::Show(MainView::Favourites),
        "shared" => Command::Show(MainView::Shared),
        "uploads" => Command::Show(MainView::Uploads),
        "cat" => {
            let tag = required("cat <pictures|documents|videos|audio>")?;
            let category = Category::from_tag(&tag).ok_or(CommandError::UnknownCategory(tag))?;
            Command::Show(MainView::Category(category))
        }

        "find" => Command::Find(required("find <text>")?),
        "clear" => Command::ClearSearch,
        "page" => {
            let arg = required("page <n>")?;
            match arg.parse::<usize>() {
                Ok(n) if n > 0 => Command::Page(n),
                _ => return Err(CommandError::InvalidPage(arg)),
            }
        }

        "fav" => Command::Favourite,
        "del" => Command::Delete,
        "ren" => Command::Rename(required("ren <new name>")?),

        "upload" => Command::Upload(PathBuf::from(required("upload <path>")?)),
        "name" => Command::SetUserName(required("name <user name>")?),

        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

impl Command {
    fn into_event(self) -> AppEvent {
        match self {
            Command::Quit => AppEvent::ExitApplication,
            Command::Show(view) => AppEvent::SetMainView(view),
            Command::Find(text) => AppEvent::SetQuery(text),
            Command::ClearSearch => AppEvent::SetQuery(String::new()),
            Command::Page(n) => AppEvent::GotoPage(n),
            Command::Favourite => AppEvent::ActOnSelection(FileAction::ToggleFavorite),
            Command::Delete => AppEvent::ActOnSelection(FileAction::Delete),
            Command::Rename(name) => AppEvent::ActOnSelection(FileAction::Rename(name)),
            Command::Upload(path) => AppEvent::StartUpload(path),
            Command::SetUserName(name) => AppEvent::SetUserName(name),
        }
    }
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` if the event was consumed, either by opening the
    /// command line with `:` or by editing or submitting the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the application event channel is closed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().to_string();
                self.active = false;
                self.input.reset();
                self.run_command(&buffer, event_tx)?;
            }

            // Backspace on an empty line leaves command mode
            KeyCode::Backspace if self.input.value().is_empty() => {
                self.active = false;
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        match parse_command(buffer) {
            Ok(Some(command)) => {
                debug!(?command, "running command");
                event_tx.send(command.into_event())?;
            }
            Ok(None) => {}
            Err(e) => event_tx.send(AppEvent::Error(e.to_string()))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command(" home "), Ok(Some(Command::Show(MainView::Dashboard))));
        assert_eq!(parse_command("favs"), Ok(Some(Command::Show(MainView::Favourites))));
        assert_eq!(
            parse_command("cat Videos"),
            Ok(Some(Command::Show(MainView::Category(Category::Videos))))
        );
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn arguments_keep_inner_spaces() {
        assert_eq!(
            parse_command("ren  Quarterly   report "),
            Ok(Some(Command::Rename("Quarterly   report".to_string())))
        );
        assert_eq!(
            parse_command("upload /tmp/My File.pdf"),
            Ok(Some(Command::Upload(PathBuf::from("/tmp/My File.pdf"))))
        );
    }

    #[test]
    fn bad_input_is_reported_not_panicked() {
        assert_eq!(parse_command("frobnicate"), Err(CommandError::Unknown("frobnicate".to_string())));
        assert!(matches!(parse_command("ren"), Err(CommandError::MissingArgument(_))));
        assert_eq!(parse_command("cat music"), Err(CommandError::UnknownCategory("music".to_string())));
        assert_eq!(parse_command("page 0"), Err(CommandError::InvalidPage("0".to_string())));
        assert_eq!(parse_command("page two"), Err(CommandError::InvalidPage("two".to_string())));
    }

    #[test]
    fn submitting_a_command_sends_its_event() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap());
        assert!(commander.active());
        for c in "page 2".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &tx).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(!commander.active());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::GotoPage(2))));
    }

    #[test]
    fn unknown_commands_become_status_errors() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('x')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Error(msg)) if msg == "Unknown command: x"));
    }

    #[test]
    fn inactive_commander_ignores_other_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut commander = Commander::new();
        assert!(!commander.handle_event(&key(KeyCode::Char('j')), &tx).unwrap());
    }
}
