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

use std::{path::Path, thread, time::Duration};

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    events::AppEvent,
    tasks::TaskContext,
    upload::{
        UploadId,
        transfer::{self, prepare_upload},
    },
};

pub(super) fn upload_file(
    ctx: &mut TaskContext,
    attempt: UploadId,
    path: &Path,
    uploaded_by: &str,
) -> Result<()> {
    // Simulated transfer time
    thread::sleep(Duration::from_millis(ctx.config.upload_delay_ms));

    let result = prepare_upload(path, uploaded_by, &transfer::today());
    match &result {
        Ok(file) => info!(%attempt, name = %file.name, size = %file.size_label, "upload finished"),
        Err(e) => warn!(%attempt, path = %path.display(), error = %e, "upload failed"),
    }

    ctx.event_tx
        .send(AppEvent::UploadFinished(attempt, result.map_err(|e| e.to_string())))?;

    Ok(())
}
