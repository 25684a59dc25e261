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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::UploadsView,
    render::icons,
    theme::Theme,
    upload::{UploadState, Uploads},
    util::format::format_count,
};

impl UploadsView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, uploads: &Uploads, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header = vec![
            Span::styled("Upload Files", Style::default().bold().fg(theme.accent_colour)),
            Span::raw(" | "),
            Span::raw(format_count(uploads.attempts().len(), "upload")),
        ];
        if uploads.pending() > 0 {
            header.push(Span::raw(format!(" | {} in progress", uploads.pending())));
        }
        f.render_widget(Paragraph::new(Line::from(header)).block(header_block), chunks[0]);

        if uploads.attempts().is_empty() {
            let empty = Paragraph::new("Nothing uploaded yet. Use :upload <path> to add a file.")
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .block(Block::default().padding(Padding::vertical(1)));
            f.render_widget(empty, chunks[1]);
        } else {
            let rows = uploads.attempts().iter().map(|attempt| {
                let (icon, status, colour) = match &attempt.state {
                    UploadState::Pending => (icons::UPLOAD_PENDING, "Uploading...".to_string(), theme.accent_colour),
                    UploadState::Succeeded(record) => (
                        icons::UPLOAD_DONE,
                        format!("Uploaded to {}", crate::model::category_display_name(&record.category)),
                        theme.status_info_colour,
                    ),
                    UploadState::Failed(reason) => (icons::UPLOAD_FAILED, reason.clone(), theme.status_error_colour),
                };

                Row::new(vec![
                    Cell::from(Line::from(icon).style(Style::default().fg(colour))),
                    Cell::from(Line::from(attempt.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                    Cell::from(
                        Line::from(attempt.size_label().unwrap_or(""))
                            .style(Style::default().fg(theme.table_size_fg))
                            .alignment(Alignment::Right),
                    ),
                    Cell::from(Line::from(status).style(Style::default().fg(colour))),
                ])
            });

            let table = Table::new(
                rows,
                [
                    Constraint::Length(2),
                    Constraint::Percentage(40),
                    Constraint::Length(10),
                    Constraint::Min(0),
                ],
            )
            .header(
                Row::new(vec![
                    Cell::from(""),
                    Cell::from("Name"),
                    Cell::from(Line::from("Size").alignment(Alignment::Right)),
                    Cell::from("Status"),
                ])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
            )
            .column_spacing(2)
            .row_highlight_style(Style::default().bg(theme.highlight_colour).fg(Color::White));

            f.render_stateful_widget(table, chunks[1], &mut self.table_state);
        }

        f.render_widget(
            Paragraph::new("x remove  X clear all")
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Right),
            chunks[2],
        );
    }
}
