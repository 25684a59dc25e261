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

//! File collection storage.
//!
//! This module provides the single owned collection of file records that
//! every list page reads from. All mutations go through [`FileStore`] so that
//! a change made on one page is immediately visible on every other page.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{
    FileId, FileRecord, NewFile,
    listview::{self, FileAction},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum StoreError {
    #[error("no file ids left to allocate")]
    IdsExhausted,
}

pub(crate) struct FileStore {
    files: Vec<FileRecord>,
    version: u64,
    /// `None` once the id space is used up.
    next_id: Option<u64>,
}

impl FileStore {
    pub(crate) fn new(seed: Vec<FileRecord>) -> Self {
        let next_id = match seed.iter().map(|f| f.id.0).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        if next_id.is_none() {
            warn!("seed uses the largest file id, uploads are disabled");
        }

        Self {
            files: seed,
            version: 0,
            next_id,
        }
    }

    pub(crate) fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub(crate) fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Incremented on every change to the collection.
    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn apply(&mut self, id: FileId, action: &FileAction) -> bool {
        let changed = listview::apply(&mut self.files, id, action);
        if changed {
            self.version += 1;
            info!(file_id = %id, ?action, version = self.version, "applied file action");
        } else {
            debug!(file_id = %id, ?action, "file action was a no-op");
        }
        changed
    }

    /// Adds a new file at the front of the collection, allocating it a fresh
    /// id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] once every id has been handed out.
    pub(crate) fn add(&mut self, file: NewFile) -> Result<FileRecord, StoreError> {
        let id = self.next_id.map(FileId).ok_or(StoreError::IdsExhausted)?;
        self.next_id = id.0.checked_add(1);

        let record = file.into_record(id);
        self.files.insert(0, record.clone());
        self.version += 1;

        info!(file_id = %id, name = %record.name, version = self.version, "added file");
        Ok(record)
    }

    pub(crate) fn count_category(&self, tag: &str) -> usize {
        self.files.iter().filter(|f| f.category == tag).count()
    }

    pub(crate) fn count_favourites(&self) -> usize {
        self.files.iter().filter(|f| f.is_favorite).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixture;

    fn new_file(name: &str) -> NewFile {
        NewFile {
            name: name.to_string(),
            file_type: "TXT file".to_string(),
            size_label: "12 Bytes".to_string(),
            category: "documents".to_string(),
            uploaded_by: "John Doe".to_string(),
            upload_date: "2024-02-01".to_string(),
        }
    }

    #[test]
    fn new_ids_continue_past_the_seed() {
        let mut store = FileStore::new(fixture::mock_files());

        let added = store.add(new_file("notes.txt")).unwrap();

        assert_eq!(added.id, FileId(9));
        assert_eq!(store.files()[0], added);
        assert!(!added.is_favorite);
    }

    #[test]
    fn largest_seed_id_stops_allocation() {
        let mut seed = fixture::mock_files();
        seed[0].id = FileId(u64::MAX);
        let mut store = FileStore::new(seed);

        assert_eq!(store.add(new_file("late.txt")), Err(StoreError::IdsExhausted));
        assert_eq!(store.files().len(), 8);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn last_free_id_is_handed_out_once() {
        let mut seed = fixture::mock_files();
        seed[0].id = FileId(u64::MAX - 1);
        let mut store = FileStore::new(seed);

        let last = store.add(new_file("last.txt")).unwrap();

        assert_eq!(last.id, FileId(u64::MAX));
        assert_eq!(store.add(new_file("one more")), Err(StoreError::IdsExhausted));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = FileStore::new(vec![]);

        let first = store.add(new_file("a")).unwrap();
        assert!(store.apply(first.id, &FileAction::Delete));
        let second = store.add(new_file("b")).unwrap();

        assert_eq!(first.id, FileId(1));
        assert_eq!(second.id, FileId(2));
    }

    #[test]
    fn version_only_moves_on_change() {
        let mut store = FileStore::new(fixture::mock_files());

        assert!(!store.apply(FileId(9999), &FileAction::Delete));
        assert_eq!(store.version(), 0);

        assert!(store.apply(FileId(1), &FileAction::ToggleFavorite));
        assert_eq!(store.version(), 1);

        store.add(new_file("c")).unwrap();
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn counts_follow_mutations() {
        let mut store = FileStore::new(fixture::mock_files());

        assert_eq!(store.count_category("documents"), 3);
        assert_eq!(store.count_favourites(), 4);

        store.apply(FileId(4), &FileAction::Delete);

        assert_eq!(store.count_category("documents"), 2);
        assert_eq!(store.count_favourites(), 3);
        assert!(store.get(FileId(4)).is_none());
    }
}
