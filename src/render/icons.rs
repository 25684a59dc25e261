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

//! Unicode symbols for the TUI.
//!
//! Icons are plain Unicode geometric shapes and dingbats rather than emoji so
//! that they pick up the table colours from the theme.

pub(crate) const FAVOURITE: &str = "\u{2764}";

// File categories
pub(crate) const PICTURE: &str = "\u{25A3}";
pub(crate) const DOCUMENT: &str = "\u{2261}";
pub(crate) const VIDEO: &str = "\u{25B6}";
pub(crate) const AUDIO: &str = "\u{266B}";
pub(crate) const OTHER: &str = "\u{25A1}";

// Navigation
pub(crate) const DASHBOARD: &str = "\u{2302}";
pub(crate) const SHARED: &str = "\u{21C4}";
pub(crate) const UPLOAD: &str = "\u{21E7}";

// Upload states
pub(crate) const UPLOAD_PENDING: &str = "\u{25CC}";
pub(crate) const UPLOAD_DONE: &str = "\u{2713}";
pub(crate) const UPLOAD_FAILED: &str = "\u{2717}";

/// Picks the icon for a category tag, unknown tags get a neutral box.
pub(crate) fn for_category(tag: &str) -> &'static str {
    match tag {
        "pictures" => PICTURE,
        "documents" => DOCUMENT,
        "videos" => VIDEO,
        "audio" => AUDIO,
        _ => OTHER,
    }
}
