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

//! Upload attempts view.
//!
//! Lists every upload attempt with its current state. The attempts are owned
//! by [`Uploads`], the view only keeps the cursor.

mod render;

use crossterm::event::{Event, KeyCode};
use ratatui::widgets::TableState;

use crate::upload::{UploadAttempt, UploadId, Uploads};

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum UploadsResponse {
    Ignored,
    Handled,
    Remove(UploadId),
    ClearAll,
}

pub(crate) struct UploadsView {
    pub(crate) table_state: TableState,
}

impl UploadsView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
        }
    }

    pub(crate) fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
        } else {
            let i = self.table_state.selected().unwrap_or(0).min(len - 1);
            self.table_state.select(Some(i));
        }
    }

    fn selected<'a>(&self, attempts: &'a [UploadAttempt]) -> Option<&'a UploadAttempt> {
        self.table_state.selected().and_then(|i| attempts.get(i))
    }

    pub(crate) fn process_event(&mut self, event: &Event, uploads: &Uploads) -> UploadsResponse {
        let Event::Key(key_event) = event else {
            return UploadsResponse::Ignored;
        };

        let attempts = uploads.attempts();
        let len = attempts.len();

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if len > 0 {
                    let i = self.table_state.selected().map_or(0, |i| (i + 1) % len);
                    self.table_state.select(Some(i));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if len > 0 {
                    let i = self
                        .table_state
                        .selected()
                        .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
                    self.table_state.select(Some(i));
                }
            }
            KeyCode::Char('g') | KeyCode::Home => {
                if len > 0 {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Char('G') | KeyCode::End => {
                if len > 0 {
                    self.table_state.select(Some(len - 1));
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                return self
                    .selected(attempts)
                    .map(|attempt| UploadsResponse::Remove(attempt.id))
                    .unwrap_or(UploadsResponse::Handled);
            }
            KeyCode::Char('X') => {
                return if len > 0 {
                    UploadsResponse::ClearAll
                } else {
                    UploadsResponse::Handled
                };
            }
            _ => return UploadsResponse::Ignored,
        }

        UploadsResponse::Handled
    }
}
