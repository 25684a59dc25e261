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

//! File list page state.
//!
//! A list page pairs a [`ListFilter`] and a current page number with the
//! file table widget. Pages never hold file records themselves, the filtered
//! view is recomputed from the shared store whenever it is needed, so every
//! page always reflects the latest collection.
//!
//! Changing the query resets the page to the first one. Any change to the
//! collection is followed by [`FileListView::clamp`], which moves the page
//! back into range (deleting the last record on the last page moves to the
//! previous page) and keeps the cursor on an existing row.

mod render;

use std::num::NonZeroUsize;

use crossterm::event::Event;
use tui_input::Input;

use crate::{
    components::{FileTable, FileTableAction, TableResponse},
    model::{
        FileId, FileRecord,
        listview::{self, ListFilter},
    },
};

pub(crate) struct FileListView {
    pub(crate) title: String,
    pub(crate) noun: &'static str,
    pub(crate) empty_message: String,
    pub(crate) filter: ListFilter,
    pub(crate) page_size: NonZeroUsize,
    pub(crate) current_page: usize,
    pub(crate) search: Input,
    pub(crate) table: FileTable,
}

impl FileListView {
    pub(crate) fn new(
        title: &str,
        noun: &'static str,
        empty_message: &str,
        filter: ListFilter,
        page_size: NonZeroUsize,
    ) -> Self {
        Self {
            title: title.to_string(),
            noun,
            empty_message: empty_message.to_string(),
            filter,
            page_size,
            current_page: 1,
            search: Input::default(),
            table: FileTable::new(),
        }
    }

    /// The filtered view of the collection, in collection order.
    pub(crate) fn visible<'a>(&self, files: &'a [FileRecord]) -> Vec<&'a FileRecord> {
        listview::filter(files, &self.filter)
    }

    pub(crate) fn total_pages(&self, files: &[FileRecord]) -> usize {
        listview::total_pages(self.visible(files).len(), self.page_size)
    }

    /// The records shown on the current page.
    pub(crate) fn page_rows<'a>(&self, files: &'a [FileRecord]) -> Vec<&'a FileRecord> {
        let visible = self.visible(files);
        listview::paginate(&visible, self.current_page, self.page_size)
            .items
            .to_vec()
    }

    pub(crate) fn selected_id(&self, files: &[FileRecord]) -> Option<FileId> {
        let index = self.table.selected_index()?;
        self.page_rows(files).get(index).map(|record| record.id)
    }

    pub(crate) fn query(&self) -> &str {
        &self.filter.query
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        if self.filter.query == query {
            return;
        }
        self.filter.query = query.to_string();
        if self.search.value() != query {
            self.search = Input::new(query.to_string());
        }
        self.current_page = 1;
        self.table.select_first();
    }

    pub(crate) fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Copies the search input into the filter after the input was edited.
    pub(crate) fn sync_query(&mut self) {
        let value = self.search.value().to_string();
        self.set_query(&value);
    }

    pub(crate) fn next_page(&mut self, files: &[FileRecord]) {
        if self.current_page < self.total_pages(files) {
            self.current_page += 1;
            self.table.select_first();
        }
    }

    pub(crate) fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.table.select_first();
        }
    }

    pub(crate) fn goto_page(&mut self, page: usize, files: &[FileRecord]) {
        self.current_page = listview::clamp_page(page, self.total_pages(files));
        self.table.select_first();
    }

    /// Brings the current page and cursor back into range after the
    /// collection changed.
    pub(crate) fn clamp(&mut self, files: &[FileRecord]) {
        self.current_page = listview::clamp_page(self.current_page, self.total_pages(files));
        let rows = self.page_rows(files).len();
        self.table.clamp(rows);
    }

    /// Offers a key event to the table, handling page movement here and
    /// passing file actions up to the caller.
    pub(crate) fn process_event(&mut self, event: &Event, files: &[FileRecord]) -> TableResponse {
        let rows = self.page_rows(files);
        match self.table.process_event(event, &rows) {
            TableResponse::Action(FileTableAction::NextPage) => {
                self.next_page(files);
                TableResponse::Handled
            }
            TableResponse::Action(FileTableAction::PreviousPage) => {
                self.previous_page();
                TableResponse::Handled
            }
            response => response,
        }
    }
}
