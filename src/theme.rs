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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) highlight_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) favourite_colour: Color,

    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,

    pub(crate) status_info_colour: Color,
    pub(crate) status_error_colour: Color,

    pub(crate) sidebar_fg: Color,
    pub(crate) sidebar_active_fg: Color,
    pub(crate) sidebar_count_fg: Color,

    pub(crate) table_name_fg: Color,
    pub(crate) table_type_fg: Color,
    pub(crate) table_size_fg: Color,
    pub(crate) table_uploader_fg: Color,
    pub(crate) table_date_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(22, 27, 38),
            accent_colour: Color::Rgb(96, 165, 250),
            border_colour: Color::Rgb(75, 85, 99),
            highlight_colour: Color::Rgb(37, 99, 235),
            muted_colour: Color::Rgb(156, 163, 175),
            favourite_colour: Color::Rgb(239, 68, 68),

            commander_colour: Color::Rgb(229, 231, 235),
            commander_bg: Color::Rgb(31, 41, 55),

            status_info_colour: Color::Rgb(52, 211, 153),
            status_error_colour: Color::Rgb(248, 113, 113),

            sidebar_fg: Color::Rgb(209, 213, 219),
            sidebar_active_fg: Color::Rgb(96, 165, 250),
            sidebar_count_fg: Color::Rgb(107, 114, 128),

            table_name_fg: Color::Rgb(255, 255, 255),
            table_type_fg: Color::Rgb(162, 161, 166),
            table_size_fg: Color::Rgb(162, 161, 166),
            table_uploader_fg: Color::Rgb(196, 181, 253),
            table_date_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only [`Color::Rgb`] values have a hexadecimal
    /// form, any other variant gives `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colours_have_a_hex_form() {
        assert_eq!(Theme::to_hex(Color::Rgb(22, 27, 38)).as_deref(), Some("#161b26"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
