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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the stored
//! file records and the categories the dashboard groups them into.

pub(crate) mod fixture;
pub(crate) mod listview;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Session-unique identifier of a stored file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(rename = "size")]
    pub size_label: String,
    pub category: String,
    pub uploaded_by: String,
    pub upload_date: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// A file record that has not been assigned an id yet.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NewFile {
    pub name: String,
    pub file_type: String,
    pub size_label: String,
    pub category: String,
    pub uploaded_by: String,
    pub upload_date: String,
}

impl NewFile {
    pub(crate) fn into_record(self, id: FileId) -> FileRecord {
        FileRecord {
            id,
            name: self.name,
            file_type: self.file_type,
            size_label: self.size_label,
            category: self.category,
            uploaded_by: self.uploaded_by,
            upload_date: self.upload_date,
            is_favorite: false,
        }
    }
}

/// The categories known to the dashboard.
///
/// Records carry a free-text category tag, this enumeration only drives
/// navigation and display names.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Category {
    Pictures,
    Documents,
    Videos,
    Audio,
}

impl Category {
    pub(crate) const ALL: [Category; 4] = [
        Category::Pictures,
        Category::Documents,
        Category::Videos,
        Category::Audio,
    ];

    pub(crate) fn tag(self) -> &'static str {
        match self {
            Category::Pictures => "pictures",
            Category::Documents => "documents",
            Category::Videos => "videos",
            Category::Audio => "audio",
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            Category::Pictures => "Pictures",
            Category::Documents => "Documents",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
        }
    }

    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.tag().eq_ignore_ascii_case(tag.trim()))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Display name for an arbitrary category tag, falling back to the tag
/// itself when it is not one of the known categories.
pub(crate) fn category_display_name(tag: &str) -> &str {
    match Category::from_tag(tag) {
        Some(category) => category.display_name(),
        None => tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_round_trip_ignoring_case() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.tag()), Some(category));
        }
        assert_eq!(Category::from_tag(" Videos "), Some(Category::Videos));
        assert_eq!(Category::from_tag("spreadsheets"), None);
    }

    #[test]
    fn unknown_category_displays_verbatim() {
        assert_eq!(category_display_name("audio"), "Audio");
        assert_eq!(category_display_name("archives"), "archives");
    }

    #[test]
    fn category_index_matches_position() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn record_uses_dashboard_json_keys() {
        let json = r#"{
            "id": 4,
            "name": "Resume",
            "type": "PDF file",
            "size": "10 MB",
            "category": "documents",
            "uploadedBy": "Sarah Wilson",
            "uploadDate": "2024-01-12",
            "isFavorite": true
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, FileId(4));
        assert_eq!(record.file_type, "PDF file");
        assert_eq!(record.size_label, "10 MB");
        assert_eq!(record.uploaded_by, "Sarah Wilson");
        assert!(record.is_favorite);
    }
}
