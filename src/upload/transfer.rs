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

//! Simulated file transfer.
//!
//! No bytes leave the machine. A transfer only inspects the local file and
//! derives the metadata of the record that a successful upload would create.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    model::{Category, NewFile},
    util::format::format_size,
};

const PICTURE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "heic"];
const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "avi", "mov", "mkv", "webm", "wmv"];
const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "flac", "ogg", "m4a", "aac"];

#[derive(Debug, Error)]
pub(crate) enum UploadError {
    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Inspects a local file and builds the record an upload of it would add.
///
/// # Arguments
///
/// * `path` - The local file to upload.
/// * `uploaded_by` - Attribution for the new record.
/// * `upload_date` - Calendar date stamped on the new record.
///
/// # Errors
///
/// Returns an [`UploadError`] if the path does not exist, is not a regular
/// file, or its metadata cannot be read.
pub(crate) fn prepare_upload(
    path: &Path,
    uploaded_by: &str,
    upload_date: &str,
) -> Result<NewFile, UploadError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => UploadError::NotFound(path.to_path_buf()),
        _ => UploadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_file() {
        return Err(UploadError::NotAFile(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| UploadError::NotAFile(path.to_path_buf()))?;

    Ok(NewFile {
        name,
        file_type: type_label(path),
        size_label: format_size(metadata.len()),
        category: category_for(path).tag().to_string(),
        uploaded_by: uploaded_by.to_string(),
        upload_date: upload_date.to_string(),
    })
}

/// The format label for a path, e.g. `"PDF file"` for `report.pdf`.
pub(crate) fn type_label(path: &Path) -> String {
    match extension(path) {
        Some(ext) => format!("{} file", ext.to_uppercase()),
        None => "File".to_string(),
    }
}

/// Picks a category from the file extension, anything unrecognised is
/// filed under documents.
pub(crate) fn category_for(path: &Path) -> Category {
    let Some(ext) = extension(path) else {
        return Category::Documents;
    };

    let ext = ext.as_str();
    if PICTURE_EXTENSIONS.contains(&ext) {
        Category::Pictures
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        Category::Videos
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        Category::Audio
    } else {
        Category::Documents
    }
}

/// Today's local date in `YYYY-MM-DD` form.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .filter(|e| !e.is_empty())
}
