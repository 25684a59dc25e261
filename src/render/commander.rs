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

//! Render the command-line interface.
//!
//! Shows the command being typed with its cursor, or a short key hint for the
//! current page while the command line is closed.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, Focus, MainView};

fn key_hint(app: &App) -> &'static str {
    match (&app.focus, app.main_view) {
        (Focus::Search, _) => "type to filter  Enter done  Esc clear",
        (Focus::Rename { .. }, _) => "Enter save  Esc cancel",
        (Focus::ConfirmDelete(_), _) => "y delete  n keep",
        (Focus::Browse, MainView::Uploads) => ": command  x remove  X clear  Tab next page  q quit",
        (Focus::Browse, _) => ": command  / search  f favorite  r rename  d delete  n/p page  q quit",
    }
}

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    if commander.active() {
        f.render_widget(
            Paragraph::new(format!(":{}", commander.input.value())).style(
                Style::default()
                    .fg(app.theme.commander_colour)
                    .bg(app.theme.commander_bg),
            ),
            container[0],
        );

        let cursor_x = container[0].x + 1 + commander.input.cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    } else {
        f.render_widget(
            Paragraph::new(key_hint(app)).style(
                Style::default()
                    .fg(app.theme.muted_colour)
                    .bg(app.theme.commander_bg),
            ),
            container[0],
        );
    }
}
