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

//! Interactive file table widget state.
//!
//! This module provides a reusable table component for displaying one page of
//! file records. The table owns only the cursor, the rows are supplied by the
//! owning list view on every event and draw, and anything that changes the
//! collection is reported back as a [`FileTableAction`].

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::FileId;

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum FileTableAction {
    NextPage,
    PreviousPage,
    ToggleFavorite(FileId),
    Rename(FileId),
    Delete(FileId),
}

/// The outcome of offering a terminal event to the table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum TableResponse {
    Ignored,
    Handled,
    Action(FileTableAction),
}

pub(crate) struct FileTable {
    pub(crate) table_state: TableState,
}

impl FileTable {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
        }
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub(crate) fn select_first(&mut self) {
        self.table_state.select(Some(0));
        *self.table_state.offset_mut() = 0;
    }

    /// Keeps the cursor on a row that exists on the current page.
    pub(crate) fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let i = self.table_state.selected().unwrap_or(0).min(len - 1);
        self.table_state.select(Some(i));
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }
}
