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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod commander;
mod dialog;
mod header;
pub(crate) mod icons;
mod sidebar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Padding, Paragraph},
};

use crate::{
    App, MainView,
    render::{
        commander::draw_commander, dialog::draw_dialog, header::draw_header, sidebar::draw_sidebar,
    },
    status::StatusKind,
};

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the header, sidebar, main page,
///   status line and command line.
/// * **State Mapping**: Drawing the active page from the shared file store.
/// * **Overlays**: The rename and delete confirmation dialogs.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like table scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: header, body, status, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Body layout: sidebar, content
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(outer[1]);

    draw_header(f, outer[0], app);
    draw_sidebar(f, body[0], app);

    let content = Block::default().padding(Padding::horizontal(1));
    let content_area = content.inner(body[1]);

    let files = app.store.files();
    let theme = &app.theme;
    match app.main_view {
        MainView::Dashboard => app.dashboard.draw(f, content_area, files, theme),
        MainView::Category(category) => {
            app.categories[category.index()].draw(f, content_area, files, theme)
        }
        MainView::Favourites => app.favourites.draw(f, content_area, files, theme),
        MainView::Shared => app.shared.draw(f, content_area, files, theme),
        MainView::Uploads => app.uploads_view.draw(f, content_area, &app.uploads, theme),
    }

    draw_status(f, outer[2], app);
    draw_commander(f, outer[3], app);

    draw_dialog(f, area, app);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let Some(message) = app.status.current() else {
        return;
    };

    let colour = match message.kind {
        StatusKind::Info => app.theme.status_info_colour,
        StatusKind::Error => app.theme.status_error_colour,
    };

    f.render_widget(
        Paragraph::new(message.text.as_str())
            .style(Style::default().fg(colour))
            .block(Block::default().padding(Padding::horizontal(1))),
        area,
    );
}
