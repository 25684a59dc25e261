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

//! File listing engine.
//!
//! This module implements the filtering, pagination and mutation logic shared
//! by every file list page. Filtering and pagination are pure functions of the
//! collection, mutations are total and report whether anything changed.
//!
//! # Operations
//!
//! * [`filter`]: Narrows a collection by category, favourite flag and a free
//!   text query, preserving the collection order.
//! * [`paginate`]: Slices a filtered list into 1-indexed pages.
//! * [`apply`]: Applies a [`FileAction`] to the record with the given id.

use std::num::NonZeroUsize;

use crate::model::{FileId, FileRecord};

/// Predicates narrowing a collection down to a filtered view.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct ListFilter {
    pub(crate) query: String,
    pub(crate) category: Option<String>,
    pub(crate) favourites_only: bool,
}

impl ListFilter {
    pub(crate) fn all() -> Self {
        Self::default()
    }

    pub(crate) fn for_category(category: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn favourites() -> Self {
        Self {
            favourites_only: true,
            ..Self::default()
        }
    }

    /// Returns `true` if the record passes every supplied predicate.
    ///
    /// An empty query matches every record, otherwise the lowercased query
    /// must be a substring of the name, type label or uploader.
    pub(crate) fn matches(&self, record: &FileRecord) -> bool {
        if let Some(category) = &self.category {
            if record.category != *category {
                return false;
            }
        }

        if self.favourites_only && !record.is_favorite {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }

        let query = self.query.to_lowercase();
        [&record.name, &record.file_type, &record.uploaded_by]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Filters a collection, keeping the records in their original order.
pub(crate) fn filter<'a>(files: &'a [FileRecord], filter: &ListFilter) -> Vec<&'a FileRecord> {
    files.iter().filter(|record| filter.matches(record)).collect()
}

/// A single 1-indexed page of a filtered list.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Page<'a, T> {
    pub(crate) items: &'a [T],
    pub(crate) number: usize,
    pub(crate) total_pages: usize,
    pub(crate) total_items: usize,
}

impl<T> Page<'_, T> {
    /// Number of pages to show to the user, an empty list is still "page 1
    /// of 1".
    pub(crate) fn display_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Pagination controls are only worth showing with more than one page.
    pub(crate) fn has_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// The 1-based position of the first item on this page, or `0` when the
    /// page is empty.
    pub(crate) fn first_position(&self, page_size: NonZeroUsize) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.number - 1) * page_size.get() + 1
        }
    }
}

/// Number of pages needed to show `len` items, `0` for an empty list.
pub(crate) fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Slices `items` into the page with the given 1-indexed number.
///
/// Any page outside `1..=total_pages` yields an empty slice rather than an
/// error, callers are expected to [`clamp_page`] after the list changes.
pub(crate) fn paginate<T>(items: &[T], page_number: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);

    let slice = match page_number.checked_sub(1) {
        Some(index) if index < total_pages => {
            let start = index * page_size.get();
            let end = (start + page_size.get()).min(total_items);
            &items[start..end]
        }
        _ => &items[0..0],
    };

    Page {
        items: slice,
        number: page_number,
        total_pages,
        total_items,
    }
}

/// Brings a page number back into `1..=max(1, total_pages)`.
pub(crate) fn clamp_page(page_number: usize, total_pages: usize) -> usize {
    page_number.clamp(1, total_pages.max(1))
}

/// A mutation applied to a single record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum FileAction {
    ToggleFavorite,
    Rename(String),
    Delete,
}

/// Applies an action to the record with the given id.
///
/// Mutations never fail: a missing id, or a rename to an empty or
/// whitespace-only name, leaves the collection untouched. Returns `true` if
/// the collection changed.
pub(crate) fn apply(files: &mut Vec<FileRecord>, id: FileId, action: &FileAction) -> bool {
    let Some(index) = files.iter().position(|record| record.id == id) else {
        return false;
    };

    match action {
        FileAction::ToggleFavorite => {
            let record = &mut files[index];
            record.is_favorite = !record.is_favorite;
            true
        }
        FileAction::Rename(name) => {
            let name = name.trim();
            if name.is_empty() {
                return false;
            }
            let record = &mut files[index];
            if record.name == name {
                return false;
            }
            record.name = name.to_string();
            true
        }
        FileAction::Delete => {
            files.remove(index);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixture;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn record(id: u64, name: &str, file_type: &str, uploaded_by: &str) -> FileRecord {
        FileRecord {
            id: FileId(id),
            name: name.to_string(),
            file_type: file_type.to_string(),
            size_label: "1 MB".to_string(),
            category: "documents".to_string(),
            uploaded_by: uploaded_by.to_string(),
            upload_date: "2024-01-01".to_string(),
            is_favorite: false,
        }
    }

    fn ids(records: &[&FileRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn empty_query_is_order_preserving_identity() {
        let files = fixture::mock_files();
        let filtered = filter(&files, &ListFilter::all());

        assert_eq!(filtered.len(), files.len());
        assert!(filtered.iter().zip(files.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn query_matches_uploader_case_insensitively() {
        let files = vec![record(4, "Resume", "PDF file", "Sarah Wilson")];
        let filter_sarah = ListFilter {
            query: "sarah".to_string(),
            ..ListFilter::default()
        };

        assert_eq!(ids(&filter(&files, &filter_sarah)), vec![4]);
    }

    #[test]
    fn every_match_contains_the_query_in_some_field() {
        let files = fixture::mock_files();
        for query in ["file", "PDF", "o", "photos", "lisa", "zzz"] {
            let list_filter = ListFilter {
                query: query.to_string(),
                ..ListFilter::default()
            };
            let filtered = filter(&files, &list_filter);
            let needle = query.to_lowercase();

            assert!(filtered.len() <= files.len());
            for r in filtered {
                assert!(
                    r.name.to_lowercase().contains(&needle)
                        || r.file_type.to_lowercase().contains(&needle)
                        || r.uploaded_by.to_lowercase().contains(&needle),
                    "{:?} does not contain {:?}",
                    r.name,
                    query
                );
            }
        }
    }

    #[test]
    fn query_does_not_search_category_or_size() {
        let files = vec![record(1, "Report", "DOCX file", "Alex Brown")];
        let list_filter = ListFilter {
            query: "documents".to_string(),
            ..ListFilter::default()
        };

        assert!(filter(&files, &list_filter).is_empty());
    }

    #[test]
    fn all_predicates_must_hold() {
        let mut files = fixture::mock_files();
        files.iter_mut().for_each(|r| r.is_favorite = r.id.0 % 2 == 0);

        let list_filter = ListFilter {
            query: "file".to_string(),
            category: Some("documents".to_string()),
            favourites_only: true,
        };

        let ids: Vec<u64> = filter(&files, &list_filter).iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![4, 8]);
    }

    #[test]
    fn category_match_is_exact() {
        let files = fixture::mock_files();

        assert!(filter(&files, &ListFilter::for_category("Documents")).is_empty());
        assert!(!filter(&files, &ListFilter::for_category("documents")).is_empty());
    }

    #[test]
    fn eight_records_make_two_pages_of_four() {
        let files = fixture::mock_files();
        assert_eq!(files.len(), 8);

        let first = paginate(&files, 1, size(4));
        let second = paginate(&files, 2, size(4));

        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items, &files[0..4]);
        assert_eq!(second.items, &files[4..8]);
        assert!(first.has_controls());
    }

    #[test]
    fn concatenated_pages_rebuild_the_list() {
        let items: Vec<u32> = (0..23).collect();

        for page_size in 1..=25 {
            let page_size = size(page_size);
            let pages = total_pages(items.len(), page_size);
            let rebuilt: Vec<u32> = (1..=pages)
                .flat_map(|n| paginate(&items, n, page_size).items.to_vec())
                .collect();

            assert_eq!(rebuilt, items);
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3];

        assert!(paginate(&items, 0, size(2)).items.is_empty());
        assert!(paginate(&items, 3, size(2)).items.is_empty());
        assert_eq!(paginate(&items, 2, size(2)).items, &[3]);
    }

    #[test]
    fn empty_list_displays_as_single_page() {
        let items: [u8; 0] = [];
        let page = paginate(&items, 1, size(8));

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.display_pages(), 1);
        assert!(!page.has_controls());
        assert_eq!(page.first_position(size(8)), 0);
    }

    #[test]
    fn first_position_is_one_based() {
        let items: Vec<u8> = (0..10).collect();
        assert_eq!(paginate(&items, 3, size(4)).first_position(size(4)), 9);
    }

    #[test]
    fn clamp_keeps_pages_in_range() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(5, 0), 1);
        assert_eq!(clamp_page(2, 4), 2);
    }

    #[test]
    fn toggling_favourite_twice_restores_the_collection() {
        let original = fixture::mock_files();
        let mut files = original.clone();

        assert!(apply(&mut files, FileId(1), &FileAction::ToggleFavorite));
        assert_ne!(files, original);
        assert!(apply(&mut files, FileId(1), &FileAction::ToggleFavorite));
        assert_eq!(files, original);
    }

    #[test]
    fn rename_trims_the_new_name() {
        let mut files = fixture::mock_files();

        assert!(apply(&mut files, FileId(4), &FileAction::Rename("  CV 2024 ".to_string())));
        assert_eq!(files[3].name, "CV 2024");
    }

    #[test]
    fn whitespace_rename_is_a_no_op() {
        let original = fixture::mock_files();
        let mut files = original.clone();

        assert!(!apply(&mut files, FileId(4), &FileAction::Rename("   ".to_string())));
        assert!(!apply(&mut files, FileId(4), &FileAction::Rename(String::new())));
        assert_eq!(files, original);
    }

    #[test]
    fn deleted_records_are_gone_from_every_view() {
        let mut files = fixture::mock_files();

        assert!(apply(&mut files, FileId(4), &FileAction::Delete));
        assert!(files.iter().all(|r| r.id != FileId(4)));

        let everything = filter(&files, &ListFilter::all());
        let pages = total_pages(everything.len(), size(3));
        assert!(
            (1..=pages)
                .flat_map(|n| paginate(&everything, n, size(3)).items.to_vec())
                .all(|r| r.id != FileId(4))
        );
    }

    #[test]
    fn missing_ids_are_no_ops() {
        let original = fixture::mock_files();
        let mut files = original.clone();

        for action in [
            FileAction::Delete,
            FileAction::ToggleFavorite,
            FileAction::Rename("New".to_string()),
        ] {
            assert!(!apply(&mut files, FileId(9999), &action));
        }
        assert_eq!(files, original);
    }

    #[test]
    fn reads_do_not_mutate() {
        let files = fixture::mock_files();
        let before = files.clone();

        let filtered = filter(&files, &ListFilter::favourites());
        let _ = paginate(&filtered, 1, size(2));

        assert_eq!(files, before);
    }
}
