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

//! Application events and the main event loop.
//!
//! Every change to application state happens on the UI thread in response to
//! an [`AppEvent`]. Key presses, ticks and task results all arrive on the
//! same channel, so state is never shared between threads.
//!
//! # Organization
//!
//! * `key_handlers`: Routes raw key presses to the command line, the focused
//!   text input, the active page, and finally the global key bindings.
//! * `handlers`: One function per application event.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::debug;

use crate::{
    App, MainView,
    model::{FileId, NewFile, listview::FileAction},
    render::draw,
    upload::UploadId,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),

    SetQuery(String),
    GotoPage(usize),

    /// Applies an action to the file under the cursor of the active page.
    ActOnSelection(FileAction),
    ApplyFileAction(FileId, FileAction),

    StartUpload(PathBuf),
    UploadFinished(UploadId, Result<NewFile, String>),
    RemoveUpload(UploadId),
    ClearUploads,

    SetUserName(String),

    Error(String),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            debug!("exit requested");
            break;
        }

        process_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
fn process_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::SetMainView(view) => handle_set_main_view(app, view),
        AppEvent::SetQuery(query) => handle_set_query(app, &query),
        AppEvent::GotoPage(page) => handle_goto_page(app, page),
        AppEvent::ActOnSelection(action) => handle_act_on_selection(app, action),
        AppEvent::ApplyFileAction(id, action) => handle_apply_file_action(app, id, action),
        AppEvent::StartUpload(path) => handle_start_upload(app, path)?,
        AppEvent::UploadFinished(id, result) => handle_upload_finished(app, id, result),
        AppEvent::RemoveUpload(id) => handle_remove_upload(app, id),
        AppEvent::ClearUploads => handle_clear_uploads(app),
        AppEvent::SetUserName(name) => handle_set_user_name(app, name),
        AppEvent::Error(text) => app.status.error(text),
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::Receiver;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{
        Focus, config::AppConfig, model::fixture, status::StatusKind, tasks::AppTask,
        upload::UploadState,
    };

    fn app() -> (App, Receiver<AppTask>) {
        let config = AppConfig {
            user_name: "Test User".to_string(),
            ..AppConfig::default()
        };
        App::new(config, fixture::mock_files())
    }

    fn press(app: &mut App, code: KeyCode) {
        process_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
        drain(app);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Processes the events that handlers queued for themselves.
    fn drain(app: &mut App) {
        while let Ok(event) = app.event_rx.try_recv() {
            if !matches!(event, AppEvent::ExitApplication) {
                process_event(app, event).unwrap();
            }
        }
    }

    fn status_text(app: &App) -> Option<(StatusKind, String)> {
        app.status.current().map(|m| (m.kind, m.text.clone()))
    }

    #[test]
    fn a_change_on_one_page_shows_on_every_page() {
        let (mut app, _tasks) = app();

        // Dashboard cursor starts on file 1, which is not a favourite
        press(&mut app, KeyCode::Char('f'));

        assert_eq!(app.store.count_favourites(), 5);
        let files = app.store.files();
        assert_eq!(app.favourites.visible(files).len(), 5);
        assert!(app.categories[0].visible(files).iter().any(|r| r.id == FileId(1) && r.is_favorite));
    }

    #[test]
    fn delete_asks_for_confirmation() {
        let (mut app, _tasks) = app();

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.focus, Focus::ConfirmDelete(FileId(1))));

        press(&mut app, KeyCode::Char('n'));
        assert!(matches!(app.focus, Focus::Browse));
        assert_eq!(app.store.files().len(), 8);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.files().len(), 7);
        assert!(app.store.get(FileId(1)).is_none());
    }

    #[test]
    fn rename_commits_on_enter_and_cancels_on_escape() {
        let (mut app, _tasks) = app();

        press(&mut app, KeyCode::Char('r'));
        assert!(matches!(app.focus, Focus::Rename { id: FileId(1), .. }));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.get(FileId(1)).unwrap().name, "IMG_0001");

        press(&mut app, KeyCode::Char('r'));
        for _ in 0.."IMG_0001".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Beach");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.get(FileId(1)).unwrap().name, "Beach");
        assert!(matches!(app.focus, Focus::Browse));
    }

    #[test]
    fn search_keys_go_to_the_search_field() {
        let (mut app, _tasks) = app();

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "pdf");
        assert_eq!(app.dashboard.query(), "pdf");
        assert_eq!(app.dashboard.visible(app.store.files()).len(), 1);
        // 'f' was typed into the search, not used to toggle a favourite
        assert_eq!(app.store.count_favourites(), 4);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.dashboard.query(), "");
    }

    #[test]
    fn commands_drive_navigation_and_paging() {
        let (mut app, _tasks) = app();

        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "cat documents");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.main_view, MainView::Category(crate::model::Category::Documents));

        process_event(&mut app, AppEvent::SetMainView(MainView::Dashboard)).unwrap();
        process_event(&mut app, AppEvent::GotoPage(9)).unwrap();
        assert_eq!(app.dashboard.current_page, 2);
    }

    #[test]
    fn deleting_the_last_dashboard_page_moves_back() {
        let (mut app, _tasks) = app();
        process_event(&mut app, AppEvent::GotoPage(2)).unwrap();

        for id in 5..=8 {
            process_event(&mut app, AppEvent::ApplyFileAction(FileId(id), FileAction::Delete)).unwrap();
        }

        assert_eq!(app.dashboard.current_page, 1);
        assert_eq!(app.dashboard.page_rows(app.store.files()).len(), 4);
    }

    #[test]
    fn uploads_are_queued_and_settled() {
        let (mut app, tasks) = app();
        let file = tempfile::NamedTempFile::new().unwrap();

        process_event(&mut app, AppEvent::StartUpload(file.path().to_path_buf())).unwrap();
        let AppTask::Upload { attempt, uploaded_by, .. } = tasks.try_recv().unwrap();
        assert_eq!(uploaded_by, "Test User");
        assert_eq!(app.uploads.pending(), 1);

        let new_file = NewFile {
            name: "notes.txt".to_string(),
            file_type: "TXT file".to_string(),
            size_label: "0 Bytes".to_string(),
            category: "documents".to_string(),
            uploaded_by,
            upload_date: "2024-02-01".to_string(),
        };
        process_event(&mut app, AppEvent::UploadFinished(attempt, Ok(new_file))).unwrap();

        assert_eq!(app.uploads.pending(), 0);
        assert_eq!(app.store.files().len(), 9);
        assert_eq!(app.store.files()[0].id, FileId(9));
        assert_eq!(app.store.count_category("documents"), 4);
    }

    #[test]
    fn failed_uploads_leave_the_collection_alone() {
        let (mut app, _tasks) = app();
        let attempt = app.uploads.begin("missing.txt");

        process_event(
            &mut app,
            AppEvent::UploadFinished(attempt, Err("no such file: missing.txt".to_string())),
        )
        .unwrap();

        assert_eq!(app.store.files().len(), 8);
        assert!(matches!(status_text(&app), Some((StatusKind::Error, _))));
    }

    #[test]
    fn uploads_fail_once_file_ids_run_out() {
        let mut seed = fixture::mock_files();
        seed[0].id = FileId(u64::MAX);
        let (mut app, _tasks) = App::new(AppConfig::default(), seed);
        let attempt = app.uploads.begin("notes.txt");

        let new_file = NewFile {
            name: "notes.txt".to_string(),
            file_type: "TXT file".to_string(),
            size_label: "0 Bytes".to_string(),
            category: "documents".to_string(),
            uploaded_by: "Test User".to_string(),
            upload_date: "2024-02-01".to_string(),
        };
        process_event(&mut app, AppEvent::UploadFinished(attempt, Ok(new_file))).unwrap();

        assert_eq!(app.store.files().len(), 8);
        assert!(matches!(app.uploads.attempts()[0].state, UploadState::Failed(_)));
        assert!(matches!(status_text(&app), Some((StatusKind::Error, _))));
    }

    #[test]
    fn acting_without_a_selection_is_an_error() {
        let (mut app, _tasks) = app();
        process_event(&mut app, AppEvent::SetQuery("zzz".to_string())).unwrap();

        process_event(&mut app, AppEvent::ActOnSelection(FileAction::Delete)).unwrap();

        assert_eq!(app.store.files().len(), 8);
        assert_eq!(status_text(&app), Some((StatusKind::Error, "No file selected".to_string())));
    }
}
