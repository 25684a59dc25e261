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

//! Render the application header and search field.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, Focus};

const SEARCH_PLACEHOLDER: &str = "Search files... (press /)";

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("File", Style::default().bold().fg(theme.accent_colour)),
        Span::styled("Deck", Style::default().bold()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::new(1, 1, 1, 0)),
    );
    f.render_widget(title, chunks[0]);

    let Some(list) = app.current_list() else {
        f.render_widget(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border_colour)),
            chunks[1],
        );
        return;
    };

    let searching = matches!(app.focus, Focus::Search);
    let border_colour = if searching {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour))
        .padding(Padding::horizontal(1));
    let inner = search_block.inner(chunks[1]);

    let text = if list.search.value().is_empty() && !searching {
        Paragraph::new(SEARCH_PLACEHOLDER).style(Style::default().fg(theme.muted_colour))
    } else {
        Paragraph::new(list.search.value())
    };
    f.render_widget(text.block(search_block), chunks[1]);

    if searching {
        let cursor_x = inner.x + (list.search.cursor() as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position((cursor_x, inner.y));
    }
}
