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

//! Seed data for the file collection.
//!
//! The collection is seeded once at startup, either from the built-in mock
//! fixture or from a JSON seed file holding an array of file records.

use std::{collections::HashSet, fs, io, path::Path};

use thiserror::Error;

use crate::model::{FileId, FileRecord};

#[derive(Debug, Error)]
pub(crate) enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("file id {0} is reserved")]
    ReservedId(FileId),
}

/// A seed collection, along with the ids dropped because they were already
/// used by an earlier record.
#[derive(Debug)]
pub(crate) struct Seed {
    pub(crate) files: Vec<FileRecord>,
    pub(crate) duplicates: Vec<FileId>,
}

/// Reads a JSON seed file.
///
/// # Errors
///
/// Returns a [`SeedError`] if the file cannot be read, is not a JSON array
/// of file records, or uses the largest id, which would leave no id free for
/// uploads.
pub(crate) fn load_seed(path: &Path) -> Result<Seed, SeedError> {
    let content = fs::read_to_string(path)?;
    parse_seed(&content)
}

pub(crate) fn parse_seed(content: &str) -> Result<Seed, SeedError> {
    let records: Vec<FileRecord> = serde_json::from_str(content)?;

    if let Some(record) = records.iter().find(|r| r.id.0 == u64::MAX) {
        return Err(SeedError::ReservedId(record.id));
    }

    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    let files = records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id);
            if !fresh {
                duplicates.push(record.id);
            }
            fresh
        })
        .collect();

    Ok(Seed { files, duplicates })
}

fn mock(
    id: u64,
    name: &str,
    file_type: &str,
    size_label: &str,
    category: &str,
    uploaded_by: &str,
    upload_date: &str,
    is_favorite: bool,
) -> FileRecord {
    FileRecord {
        id: FileId(id),
        name: name.to_string(),
        file_type: file_type.to_string(),
        size_label: size_label.to_string(),
        category: category.to_string(),
        uploaded_by: uploaded_by.to_string(),
        upload_date: upload_date.to_string(),
        is_favorite,
    }
}

/// The built-in mock collection.
pub(crate) fn mock_files() -> Vec<FileRecord> {
    vec![
        mock(1, "IMG_0001", "PNG file", "5 MB", "pictures", "John Doe", "2024-01-15", false),
        mock(2, "Startup pitch", "AVI file", "105 MB", "videos", "Jane Smith", "2024-01-14", true),
        mock(3, "Elon Musk Podcast", "MP3 file", "550 MB", "audio", "Mike Johnson", "2024-01-13", false),
        mock(4, "Resume", "PDF file", "10 MB", "documents", "Sarah Wilson", "2024-01-12", true),
        mock(5, "Project Report", "DOCX file", "25 MB", "documents", "Alex Brown", "2024-01-11", false),
        mock(6, "Vacation Photos", "JPG file", "15 MB", "pictures", "Emma Davis", "2024-01-10", true),
        mock(7, "Meeting Recording", "MP4 file", "85 MB", "videos", "Tom Wilson", "2024-01-09", false),
        mock(8, "Budget Spreadsheet", "XLSX file", "3 MB", "documents", "Lisa Chen", "2024-01-08", true),
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn mock_ids_are_unique() {
        let files = mock_files();
        let ids: HashSet<FileId> = files.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), files.len());
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let seed = parse_seed(
            r#"[
                {"id": 1, "name": "a", "type": "PDF file", "size": "1 MB", "category": "documents",
                 "uploadedBy": "x", "uploadDate": "2024-01-01", "isFavorite": false},
                {"id": 1, "name": "b", "type": "PDF file", "size": "1 MB", "category": "documents",
                 "uploadedBy": "x", "uploadDate": "2024-01-01"}
            ]"#,
        )
        .unwrap();

        assert_eq!(seed.files.len(), 1);
        assert_eq!(seed.files[0].name, "a");
        assert_eq!(seed.duplicates, vec![FileId(1)]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let seed = parse_seed(
            r#"[{"id": 9, "name": "Logo", "type": "SVG file", "size": "3 KB", "icon": "camera",
                 "color": "bg-purple-500", "category": "pictures", "uploadedBy": "x",
                 "uploadDate": "2024-02-01", "isFavorite": true}]"#,
        )
        .unwrap();

        assert_eq!(seed.files[0].id, FileId(9));
        assert!(seed.files[0].is_favorite);
    }

    #[test]
    fn largest_id_is_rejected() {
        let result = parse_seed(
            r#"[{"id": 18446744073709551615, "name": "a", "type": "PDF file", "size": "1 MB",
                 "category": "documents", "uploadedBy": "x", "uploadDate": "2024-01-01"}]"#,
        );

        assert!(matches!(result, Err(SeedError::ReservedId(FileId(u64::MAX)))));
    }

    #[test]
    fn malformed_seed_is_an_error() {
        assert!(matches!(parse_seed("{\"id\": 1}"), Err(SeedError::Json(_))));
    }

    #[test]
    fn load_seed_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&mock_files()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let seed = load_seed(file.path()).unwrap();
        assert_eq!(seed.files, mock_files());
        assert!(seed.duplicates.is_empty());
    }

    #[test]
    fn missing_seed_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_seed(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(SeedError::Io(_))));
    }
}
