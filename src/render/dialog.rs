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

//! Render the rename and delete confirmation dialogs.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{App, Focus};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 6;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub(crate) fn draw_dialog(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let (title, lines, cursor) = match &app.focus {
        Focus::Rename { id, input } => {
            let current = app.store.get(*id).map(|r| r.name.as_str()).unwrap_or_default();
            (
                " Rename file ",
                vec![
                    Line::from(Span::styled(
                        format!("Current name: {}", current),
                        Style::default().fg(theme.muted_colour),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(input.value(), Style::default().fg(theme.table_name_fg))),
                ],
                Some(input.cursor()),
            )
        }
        Focus::ConfirmDelete(id) => {
            let name = app.store.get(*id).map(|r| r.name.as_str()).unwrap_or_default();
            (
                " Delete file ",
                vec![
                    Line::from(vec![
                        Span::raw("Delete "),
                        Span::styled(format!("\"{}\"", name), Style::default().bold()),
                        Span::raw("?"),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        "y delete  n keep",
                        Style::default().fg(theme.muted_colour),
                    )),
                ],
                None,
            )
        }
        Focus::Browse | Focus::Search => return,
    };

    let popup = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(popup);

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);

    if let Some(cursor) = cursor {
        let cursor_x = inner.x + (cursor as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position((cursor_x, inner.y + 2));
    }
}
