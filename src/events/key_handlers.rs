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

//! Keyboard routing.
//!
//! A key press is offered, in order, to:
//!
//! * **Text entry**: the search field, the rename field or the delete
//!   confirmation, whichever currently has focus. Text entry swallows every
//!   key so that typing never triggers a binding.
//! * **Command line**: opened with `:`.
//! * **Active page**: cursor movement, paging and file actions.
//! * **Global bindings**: page switching, search focus and quitting.

use std::mem;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    App, Focus, MainView,
    components::{FileTableAction, TableResponse, UploadsResponse},
    events::AppEvent,
    model::{Category, FileId, listview::FileAction},
};

/// Maps keyboard input to application actions.
///
/// # Arguments
///
/// * `app` - A mutable reference to the application state.
/// * `key` - The key event captured from the terminal backend.
///
/// # Errors
///
/// Returns an error if an event fails to send on the application channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    match mem::replace(&mut app.focus, Focus::Browse) {
        Focus::Browse => {}
        Focus::Search => {
            process_search_key(app, key, &event);
            return Ok(());
        }
        Focus::Rename { id, input } => {
            process_rename_key(app, key, &event, id, input)?;
            return Ok(());
        }
        Focus::ConfirmDelete(id) => {
            process_confirm_delete_key(app, key, id)?;
            return Ok(());
        }
    }

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if process_page_key(app, &event)? {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_search_key(app: &mut App, key: KeyEvent, event: &Event) {
    let Some((list, _)) = app.active_list() else {
        return;
    };

    match key.code {
        KeyCode::Esc => list.clear_query(),
        KeyCode::Enter | KeyCode::Tab => {}
        _ => {
            list.search.handle_event(event);
            list.sync_query();
            app.focus = Focus::Search;
        }
    }
}

fn process_rename_key(
    app: &mut App,
    key: KeyEvent,
    event: &Event,
    id: FileId,
    mut input: Input,
) -> Result<()> {
    match key.code {
        KeyCode::Esc => {}
        KeyCode::Enter => {
            let name = input.value().to_string();
            app.event_tx
                .send(AppEvent::ApplyFileAction(id, FileAction::Rename(name)))?;
        }
        _ => {
            input.handle_event(event);
            app.focus = Focus::Rename { id, input };
        }
    }
    Ok(())
}

fn process_confirm_delete_key(app: &mut App, key: KeyEvent, id: FileId) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.event_tx
                .send(AppEvent::ApplyFileAction(id, FileAction::Delete))?;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
        _ => app.focus = Focus::ConfirmDelete(id),
    }
    Ok(())
}

/// Offers the key to the active page, returns `true` if it was consumed.
fn process_page_key(app: &mut App, event: &Event) -> Result<bool> {
    if app.main_view == MainView::Uploads {
        return match app.uploads_view.process_event(event, &app.uploads) {
            UploadsResponse::Ignored => Ok(false),
            UploadsResponse::Handled => Ok(true),
            UploadsResponse::Remove(id) => {
                app.event_tx.send(AppEvent::RemoveUpload(id))?;
                Ok(true)
            }
            UploadsResponse::ClearAll => {
                app.event_tx.send(AppEvent::ClearUploads)?;
                Ok(true)
            }
        };
    }

    let Some((list, files)) = app.active_list() else {
        return Ok(false);
    };

    match list.process_event(event, files) {
        TableResponse::Ignored => Ok(false),
        TableResponse::Handled => Ok(true),
        TableResponse::Action(FileTableAction::ToggleFavorite(id)) => {
            app.event_tx
                .send(AppEvent::ApplyFileAction(id, FileAction::ToggleFavorite))?;
            Ok(true)
        }
        TableResponse::Action(FileTableAction::Rename(id)) => {
            let name = files
                .iter()
                .find(|f| f.id == id)
                .map(|f| f.name.clone())
                .unwrap_or_default();
            app.focus = Focus::Rename {
                id,
                input: Input::new(name),
            };
            Ok(true)
        }
        TableResponse::Action(FileTableAction::Delete(id)) => {
            app.focus = Focus::ConfirmDelete(id);
            Ok(true)
        }
        // Page movement is resolved by the list itself
        TableResponse::Action(FileTableAction::NextPage | FileTableAction::PreviousPage) => Ok(true),
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Tab => app.event_tx.send(AppEvent::SetMainView(app.main_view.next()))?,
        KeyCode::BackTab => app
            .event_tx
            .send(AppEvent::SetMainView(app.main_view.previous()))?,

        KeyCode::Char('1') => app.event_tx.send(AppEvent::SetMainView(MainView::Dashboard))?,
        KeyCode::Char('2') => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Favourites))?,
        KeyCode::Char('3') => app.event_tx.send(AppEvent::SetMainView(MainView::Shared))?,
        KeyCode::Char('4') => app.event_tx.send(AppEvent::SetMainView(MainView::Uploads))?,
        KeyCode::Char(c @ '5'..='8') => {
            let category = Category::ALL[c as usize - '5' as usize];
            app.event_tx
                .send(AppEvent::SetMainView(MainView::Category(category)))?
        }

        KeyCode::Char('/') => {
            if app.active_list().is_some() {
                app.focus = Focus::Search;
            }
        }
        KeyCode::Esc => {
            if let Some((list, _)) = app.active_list() {
                list.clear_query();
            }
        }

        _ => {}
    }

    Ok(())
}
