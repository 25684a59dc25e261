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

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    App, Focus, MainView, config,
    model::{FileId, NewFile, category_display_name, listview::FileAction},
    tasks::AppTask,
    upload::UploadId,
};

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    debug!(?main_view, "switching page");
    app.focus = Focus::Browse;
    app.main_view = main_view;
}

pub(super) fn handle_set_query(app: &mut App, query: &str) {
    match app.active_list() {
        Some((list, _)) => list.set_query(query.trim()),
        None => app.status.error("Search is not available on this page"),
    }
}

pub(super) fn handle_goto_page(app: &mut App, page: usize) {
    match app.active_list() {
        Some((list, files)) => list.goto_page(page, files),
        None => app.status.error("Paging is not available on this page"),
    }
}

pub(super) fn handle_act_on_selection(app: &mut App, action: FileAction) {
    let selected = app.active_list().and_then(|(list, files)| list.selected_id(files));
    match selected {
        Some(id) => handle_apply_file_action(app, id, action),
        None => app.status.error("No file selected"),
    }
}

pub(super) fn handle_apply_file_action(app: &mut App, id: FileId, action: FileAction) {
    let Some(name) = app.store.get(id).map(|f| f.name.clone()) else {
        warn!(file_id = %id, "action on a file that no longer exists");
        app.status.error("That file no longer exists");
        return;
    };

    if let FileAction::Rename(new_name) = &action {
        if new_name.trim().is_empty() {
            app.status.error("File name cannot be empty");
            return;
        }
    }

    if !app.store.apply(id, &action) {
        return;
    }

    app.clamp_lists();

    let message = match (&action, app.store.get(id)) {
        (FileAction::ToggleFavorite, Some(file)) if file.is_favorite => {
            format!("Added \"{}\" to favorites", name)
        }
        (FileAction::ToggleFavorite, _) => format!("Removed \"{}\" from favorites", name),
        (FileAction::Rename(_), Some(file)) => format!("Renamed \"{}\" to \"{}\"", name, file.name),
        (FileAction::Rename(_), None) => format!("Renamed \"{}\"", name),
        (FileAction::Delete, _) => format!("Deleted \"{}\"", name),
    };
    app.status.info(message);
}

pub(super) fn handle_start_upload(app: &mut App, path: PathBuf) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let attempt = app.uploads.begin(&name);
    app.uploads_view.clamp(app.uploads.attempts().len());
    info!(%attempt, path = %path.display(), "starting upload");

    app.task_tx.send(AppTask::Upload {
        attempt,
        path,
        uploaded_by: app.config.user_name.clone(),
    })?;

    app.status.info(format!("Uploading \"{}\"...", name));

    Ok(())
}

pub(super) fn handle_upload_finished(app: &mut App, attempt: UploadId, result: Result<NewFile, String>) {
    let result = result.and_then(|file| app.store.add(file).map_err(|e| e.to_string()));

    match result {
        Ok(record) => {
            let message = format!(
                "Uploaded \"{}\" to {}",
                record.name,
                category_display_name(&record.category)
            );
            if !app.uploads.succeed(attempt, record) {
                debug!(%attempt, "upload finished after its attempt was dismissed");
            }
            app.clamp_lists();
            app.status.info(message);
        }
        Err(reason) => {
            app.uploads.fail(attempt, reason.clone());
            app.status.error(format!("Upload failed: {}", reason));
        }
    }
}

pub(super) fn handle_remove_upload(app: &mut App, attempt: UploadId) {
    app.uploads.remove(attempt);
    app.uploads_view.clamp(app.uploads.attempts().len());
}

pub(super) fn handle_clear_uploads(app: &mut App) {
    app.uploads.clear();
    app.uploads_view.clamp(0);
}

pub(super) fn handle_set_user_name(app: &mut App, name: String) {
    app.config.user_name = name;

    match config::save_config(&app.config) {
        Ok(()) => {
            info!(user = %app.config.user_name, "saved configuration");
            app.status.info(format!("Signed in as {}", app.config.user_name));
        }
        Err(e) => {
            warn!(error = %e, "failed to save configuration");
            app.status.error(format!("Name changed but not saved: {}", e));
        }
    }
}

pub(super) fn handle_tick(app: &mut App) {
    app.status.tick();
}
