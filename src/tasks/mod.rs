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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload slow work from
//! the main UI thread. It provides a dedicated worker loop that translates
//! [`AppTask`] requests into file operations and broadcasts the results back
//! to the application via [`AppEvent`]s.
//!
//! The worker never touches the file collection. Results travel back as
//! events and are applied on the UI thread, which owns the store.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;
use handlers::*;

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{debug, warn};

use crate::{config::AppConfig, events::AppEvent, upload::UploadId};

#[derive(Debug)]
pub(crate) enum AppTask {
    Upload {
        attempt: UploadId,
        path: PathBuf,
        uploaded_by: String,
    },
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            debug!(?task, "received task");

            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                warn!(error = %e, "task failed");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
        debug!("task channel closed, worker exiting");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::Upload {
            attempt,
            path,
            uploaded_by,
        } => upload_file(ctx, attempt, &path, &uploaded_by),
    }
}
