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

//! UI rendering logic for a file list page.
//!
//! Draws the page header with the matching file count, the table for the
//! current page, and a pager footer when there is more than one page.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::FileListView,
    model::{FileRecord, listview},
    theme::Theme,
    util::format::format_count,
};

impl FileListView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, files: &[FileRecord], theme: &Theme) {
        let visible = self.visible(files);
        let page = listview::paginate(&visible, self.current_page, self.page_size);

        let footer_height = if page.has_controls() { 1 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header_text = format_count(page.total_items, self.noun);
        if !self.filter.query.is_empty() {
            let _ = write!(header_text, " matching \"{}\"", self.filter.query);
        }

        let header = Paragraph::new(Line::from(vec![
            Span::styled(self.title.as_str(), Style::default().bold().fg(theme.accent_colour)),
            Span::raw(" | "),
            Span::raw(header_text),
        ]))
        .block(header_block);

        f.render_widget(header, chunks[0]);

        if page.items.is_empty() {
            let message = if self.filter.query.is_empty() {
                self.empty_message.clone()
            } else {
                format!("No files match \"{}\".", self.filter.query)
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .block(Block::default().padding(Padding::vertical(1)));
            f.render_widget(empty, chunks[1]);
        } else {
            let rows = page.items.to_vec();
            self.table.draw(f, chunks[1], &rows, theme);
        }

        if page.has_controls() {
            let first = page.first_position(self.page_size);
            let last = first + page.items.len().saturating_sub(1);
            let pager = Paragraph::new(format!(
                "< p  Page {} of {}  n >   {}-{} of {}",
                page.number,
                page.display_pages(),
                first,
                last,
                page.total_items
            ))
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Right);
            f.render_widget(pager, chunks[2]);
        }
    }
}
