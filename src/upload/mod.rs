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

//! Upload attempt tracking.
//!
//! This module provides state for the uploads view. Every upload is an
//! explicit attempt that moves from pending to either succeeded or failed,
//! the transfer itself is simulated by the task worker (see [`transfer`]).

pub(crate) mod transfer;

use std::fmt;

use crate::model::FileRecord;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) struct UploadId(pub(crate) u64);

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum UploadState {
    Pending,
    Succeeded(FileRecord),
    Failed(String),
}

#[derive(Debug, Clone)]
pub(crate) struct UploadAttempt {
    pub(crate) id: UploadId,
    pub(crate) name: String,
    pub(crate) state: UploadState,
}

impl UploadAttempt {
    pub(crate) fn size_label(&self) -> Option<&str> {
        match &self.state {
            UploadState::Succeeded(record) => Some(&record.size_label),
            _ => None,
        }
    }
}

#[derive(Default)]
pub(crate) struct Uploads {
    attempts: Vec<UploadAttempt>,
    next_id: u64,
}

impl Uploads {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn attempts(&self) -> &[UploadAttempt] {
        &self.attempts
    }

    pub(crate) fn begin(&mut self, name: &str) -> UploadId {
        self.next_id += 1;
        let id = UploadId(self.next_id);

        self.attempts.push(UploadAttempt {
            id,
            name: name.to_string(),
            state: UploadState::Pending,
        });

        id
    }

    /// Marks a pending attempt as succeeded, returns `false` if the attempt
    /// was removed in the meantime.
    pub(crate) fn succeed(&mut self, id: UploadId, record: FileRecord) -> bool {
        self.settle(id, UploadState::Succeeded(record))
    }

    pub(crate) fn fail(&mut self, id: UploadId, reason: String) -> bool {
        self.settle(id, UploadState::Failed(reason))
    }

    pub(crate) fn remove(&mut self, id: UploadId) {
        self.attempts.retain(|a| a.id != id);
    }

    pub(crate) fn clear(&mut self) {
        self.attempts.clear();
    }

    pub(crate) fn pending(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.state == UploadState::Pending)
            .count()
    }

    fn settle(&mut self, id: UploadId, state: UploadState) -> bool {
        match self.attempts.iter_mut().find(|a| a.id == id) {
            Some(attempt) if attempt.state == UploadState::Pending => {
                attempt.state = state;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixture;

    #[test]
    fn attempts_start_pending() {
        let mut uploads = Uploads::new();
        let id = uploads.begin("report.pdf");

        assert_eq!(uploads.attempts()[0].id, id);
        assert_eq!(uploads.attempts()[0].state, UploadState::Pending);
        assert_eq!(uploads.pending(), 1);
        assert_eq!(uploads.attempts()[0].size_label(), None);
    }

    #[test]
    fn attempts_settle_once() {
        let mut uploads = Uploads::new();
        let id = uploads.begin("a.png");
        let record = fixture::mock_files().remove(0);

        assert!(uploads.succeed(id, record.clone()));
        assert!(!uploads.fail(id, "too late".to_string()));
        assert_eq!(uploads.attempts()[0].state, UploadState::Succeeded(record));
        assert_eq!(uploads.attempts()[0].size_label(), Some("5 MB"));
        assert_eq!(uploads.pending(), 0);
    }

    #[test]
    fn removed_attempts_ignore_late_results() {
        let mut uploads = Uploads::new();
        let first = uploads.begin("a");
        let second = uploads.begin("b");

        uploads.remove(first);

        assert!(!uploads.fail(first, "gone".to_string()));
        assert!(uploads.fail(second, "disk error".to_string()));
        assert_eq!(uploads.attempts().len(), 1);
        assert_eq!(
            uploads.attempts()[0].state,
            UploadState::Failed("disk error".to_string())
        );
    }

    #[test]
    fn clear_drops_everything_and_ids_stay_unique() {
        let mut uploads = Uploads::new();
        let first = uploads.begin("a");
        uploads.clear();
        let second = uploads.begin("b");

        assert_ne!(first, second);
        assert_eq!(uploads.attempts().len(), 1);
    }
}
