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

//! UI rendering logic for the file table.
//!
//! This module handles the visual representation of a page of file records,
//! including column layout, favourite markers, and theme application using
//! the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::FileTable,
    model::{FileRecord, category_display_name},
    render::icons,
    theme::Theme,
};

impl FileTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, rows: &[&FileRecord], theme: &Theme) {
        let table_rows = rows.iter().map(|item| {
            let favourite = if item.is_favorite {
                Line::from(icons::FAVOURITE).style(Style::default().fg(theme.favourite_colour))
            } else {
                Line::from("")
            };

            Row::new(vec![
                Cell::from(favourite),
                Cell::from(Line::from(icons::for_category(&item.category))),
                Cell::from(Line::from(item.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                Cell::from(Line::from(item.file_type.as_str()).style(Style::default().fg(theme.table_type_fg))),
                Cell::from(Line::from(category_display_name(&item.category)).style(Style::default().fg(theme.table_type_fg))),
                Cell::from(Line::from(item.size_label.as_str()).style(Style::default().fg(theme.table_size_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(item.uploaded_by.as_str()).style(Style::default().fg(theme.table_uploader_fg))),
                Cell::from(Line::from(item.upload_date.as_str()).style(Style::default().fg(theme.table_date_fg))),
            ])
        });

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Percentage(30),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Percentage(20),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(""),
                Cell::from("Name"),
                Cell::from("Type"),
                Cell::from("Category"),
                Cell::from(Line::from("Size").alignment(Alignment::Right)),
                Cell::from("Uploaded by"),
                Cell::from("Date"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(theme.highlight_colour).fg(Color::White))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
