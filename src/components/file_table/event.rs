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

//! Input handling for the file table.
//!
//! This module maps raw terminal keyboard events to cursor movement, page
//! changes and file actions on the row under the cursor.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    components::{FileTable, FileTableAction, TableResponse},
    model::FileRecord,
};

impl FileTable {
    pub(crate) fn process_event(&mut self, event: &Event, rows: &[&FileRecord]) -> TableResponse {
        let Event::Key(key_event) = event else {
            return TableResponse::Ignored;
        };

        let len = rows.len();
        let current = self
            .table_state
            .selected()
            .and_then(|i| rows.get(i))
            .map(|record| record.id);

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(len),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(len),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(len),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(len),

            (KeyCode::Char('n'), KeyModifiers::NONE)
            | (KeyCode::Right, _)
            | (KeyCode::PageDown, _)
            | (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
                return TableResponse::Action(FileTableAction::NextPage);
            }
            (KeyCode::Char('p'), KeyModifiers::NONE)
            | (KeyCode::Left, _)
            | (KeyCode::PageUp, _)
            | (KeyCode::Char('b'), KeyModifiers::CONTROL) => {
                return TableResponse::Action(FileTableAction::PreviousPage);
            }

            (KeyCode::Char('f'), KeyModifiers::NONE) => {
                return current
                    .map(|id| TableResponse::Action(FileTableAction::ToggleFavorite(id)))
                    .unwrap_or(TableResponse::Handled);
            }
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                return current
                    .map(|id| TableResponse::Action(FileTableAction::Rename(id)))
                    .unwrap_or(TableResponse::Handled);
            }
            (KeyCode::Char('d'), KeyModifiers::NONE) | (KeyCode::Delete, _) => {
                return current
                    .map(|id| TableResponse::Action(FileTableAction::Delete(id)))
                    .unwrap_or(TableResponse::Handled);
            }

            _ => return TableResponse::Ignored,
        }

        TableResponse::Handled
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::model::{FileId, fixture};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn cursor_wraps_around_the_page() {
        let files = fixture::mock_files();
        let rows: Vec<&FileRecord> = files.iter().take(3).collect();
        let mut table = FileTable::new();

        table.process_event(&key(KeyCode::Up), &rows);
        assert_eq!(table.selected_index(), Some(2));

        table.process_event(&key(KeyCode::Char('j')), &rows);
        assert_eq!(table.selected_index(), Some(0));

        table.process_event(&key(KeyCode::Char('G')), &rows);
        assert_eq!(table.selected_index(), Some(2));
    }

    #[test]
    fn actions_target_the_row_under_the_cursor() {
        let files = fixture::mock_files();
        let rows: Vec<&FileRecord> = files.iter().collect();
        let mut table = FileTable::new();

        table.process_event(&key(KeyCode::Down), &rows);

        assert_eq!(
            table.process_event(&key(KeyCode::Char('f')), &rows),
            TableResponse::Action(FileTableAction::ToggleFavorite(FileId(2)))
        );
        assert_eq!(
            table.process_event(&key(KeyCode::Char('d')), &rows),
            TableResponse::Action(FileTableAction::Delete(FileId(2)))
        );
        assert_eq!(
            table.process_event(&key(KeyCode::Char('r')), &rows),
            TableResponse::Action(FileTableAction::Rename(FileId(2)))
        );
    }

    #[test]
    fn empty_pages_swallow_file_actions() {
        let mut table = FileTable::new();
        table.clamp(0);

        assert_eq!(table.process_event(&key(KeyCode::Char('d')), &[]), TableResponse::Handled);
        assert_eq!(table.selected_index(), None);
    }

    #[test]
    fn page_keys_become_page_actions() {
        let mut table = FileTable::new();

        assert_eq!(
            table.process_event(&key(KeyCode::Char('n')), &[]),
            TableResponse::Action(FileTableAction::NextPage)
        );
        assert_eq!(
            table.process_event(&key(KeyCode::Left), &[]),
            TableResponse::Action(FileTableAction::PreviousPage)
        );
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut table = FileTable::new();
        assert_eq!(table.process_event(&key(KeyCode::Char('q')), &[]), TableResponse::Ignored);
    }
}
