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

//! Stateful UI components.
//!
//! Each component keeps its own widget state next to an `event` module for
//! input handling and a `render` module for drawing.

mod file_list;
mod file_table;
mod uploads;

pub(crate) use file_list::FileListView;
pub(crate) use file_table::{FileTable, FileTableAction, TableResponse};
pub(crate) use uploads::{UploadsResponse, UploadsView};
