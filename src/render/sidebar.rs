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

//! Render the navigation sidebar.
//!
//! Lists every page with its shortcut key and the number of files it
//! currently shows, followed by the signed in user.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, MainView, render::icons};

fn label(view: MainView) -> &'static str {
    match view {
        MainView::Dashboard => "Dashboard",
        MainView::Category(category) => category.display_name(),
        MainView::Favourites => "Favorites",
        MainView::Shared => "Shared",
        MainView::Uploads => "Uploads",
    }
}

fn icon(view: MainView) -> &'static str {
    match view {
        MainView::Dashboard => icons::DASHBOARD,
        MainView::Category(category) => icons::for_category(category.tag()),
        MainView::Favourites => icons::FAVOURITE,
        MainView::Shared => icons::SHARED,
        MainView::Uploads => icons::UPLOAD,
    }
}

fn shortcut(view: MainView) -> char {
    match view {
        MainView::Dashboard => '1',
        MainView::Favourites => '2',
        MainView::Shared => '3',
        MainView::Uploads => '4',
        MainView::Category(category) => (b'5' + category.index() as u8) as char,
    }
}

fn count(app: &App, view: MainView) -> usize {
    match view {
        MainView::Dashboard | MainView::Shared => app.store.files().len(),
        MainView::Category(category) => app.store.count_category(category.tag()),
        MainView::Favourites => app.store.count_favourites(),
        MainView::Uploads => app.uploads.attempts().len(),
    }
}

pub(crate) fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::new(1, 1, 1, 0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let lines: Vec<Line> = MainView::all()
        .iter()
        .map(|&view| {
            let active = view == app.main_view;
            let style = if active {
                Style::default()
                    .fg(theme.sidebar_active_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.sidebar_fg)
            };

            let name = format!("{} {}", icon(view), label(view));
            let width = (chunks[0].width as usize).saturating_sub(4);

            Line::from(vec![
                Span::styled(format!("{} ", shortcut(view)), Style::default().fg(theme.sidebar_count_fg)),
                Span::styled(format!("{:<w$}", name, w = width.saturating_sub(4)), style),
                Span::styled(format!("{:>3}", count(app, view)), Style::default().fg(theme.sidebar_count_fg)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), chunks[0]);

    let user = Paragraph::new(vec![
        Line::from(Span::styled("Signed in as", Style::default().fg(theme.sidebar_count_fg))),
        Line::from(Span::styled(
            app.config.user_name.as_str(),
            Style::default().fg(theme.sidebar_fg).add_modifier(Modifier::BOLD),
        )),
    ]);
    f.render_widget(user, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn shortcuts_match_the_key_bindings() {
        let keys: String = MainView::all().iter().map(|&v| shortcut(v)).collect();
        assert_eq!(keys, "15678234");
        assert_eq!(label(MainView::Category(Category::Audio)), "Audio");
    }
}
