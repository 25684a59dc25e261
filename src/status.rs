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

//! Transient status line messages.
//!
//! A message stays visible for a fixed number of UI ticks and is then
//! cleared. Errors linger a little longer than confirmations.

const INFO_TICKS: u32 = 16;
const ERROR_TICKS: u32 = 24;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct StatusMessage {
    pub(crate) kind: StatusKind,
    pub(crate) text: String,
    ticks_left: u32,
}

#[derive(Default)]
pub(crate) struct StatusLine {
    message: Option<StatusMessage>,
}

impl StatusLine {
    pub(crate) fn info(&mut self, text: impl Into<String>) {
        self.set(StatusKind::Info, text.into(), INFO_TICKS);
    }

    pub(crate) fn error(&mut self, text: impl Into<String>) {
        self.set(StatusKind::Error, text.into(), ERROR_TICKS);
    }

    pub(crate) fn current(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Advances the message timer by one tick.
    pub(crate) fn tick(&mut self) {
        if let Some(message) = &mut self.message {
            message.ticks_left = message.ticks_left.saturating_sub(1);
            if message.ticks_left == 0 {
                self.message = None;
            }
        }
    }

    fn set(&mut self, kind: StatusKind, text: String, ticks: u32) {
        self.message = Some(StatusMessage {
            kind,
            text,
            ticks_left: ticks,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_expire_after_their_ticks() {
        let mut status = StatusLine::default();
        status.info("Saved");

        for _ in 0..INFO_TICKS - 1 {
            status.tick();
        }
        assert_eq!(status.current().map(|m| m.text.as_str()), Some("Saved"));

        status.tick();
        assert!(status.current().is_none());
    }

    #[test]
    fn newer_messages_replace_older_ones() {
        let mut status = StatusLine::default();
        status.info("Saved");
        status.error("Upload failed");

        let current = status.current().unwrap();
        assert_eq!(current.kind, StatusKind::Error);
        assert_eq!(current.text, "Upload failed");
    }
}
