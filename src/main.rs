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

//! # File Dashboard TUI.
//!
//! A terminal-based file manager dashboard.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the file collection, manages the terminal
//!   lifecycle and renders the UI.
//! * A **Background Worker** handles simulated uploads via asynchronous task
//!   processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod commander;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod status;
mod store;
mod tasks;
mod theme;
mod upload;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    path::Path,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{debug, error, info, warn};
use tui_input::Input;

use crate::{
    commander::Commander,
    components::{FileListView, UploadsView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{Category, FileId, FileRecord, fixture, listview::ListFilter},
    status::StatusLine,
    store::FileStore,
    tasks::AppTask,
    theme::Theme,
    upload::Uploads,
};

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum MainView {
    Dashboard,
    Category(Category),
    Favourites,
    Shared,
    Uploads,
}

impl MainView {
    /// Every page in navigation order.
    const ORDER: [MainView; 8] = [
        MainView::Dashboard,
        MainView::Category(Category::Pictures),
        MainView::Category(Category::Documents),
        MainView::Category(Category::Videos),
        MainView::Category(Category::Audio),
        MainView::Favourites,
        MainView::Shared,
        MainView::Uploads,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub(crate) fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub(crate) fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub(crate) fn all() -> &'static [MainView] {
        &Self::ORDER
    }
}

/// Which input currently receives key presses.
pub(crate) enum Focus {
    Browse,
    Search,
    Rename { id: FileId, input: Input },
    ConfirmDelete(FileId),
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub store: FileStore,
    pub uploads: Uploads,

    pub dashboard: FileListView,
    pub categories: [FileListView; 4],
    pub favourites: FileListView,
    pub shared: FileListView,
    pub uploads_view: UploadsView,

    pub commander: Commander,
    pub status: StatusLine,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// Returns the application together with the receiving end of the task
    /// channel, which the caller hands to the task worker.
    pub fn new(config: AppConfig, seed: Vec<FileRecord>) -> (Self, Receiver<AppTask>) {
        let (event_tx, event_rx) = mpsc::channel();
        let (task_tx, task_rx) = mpsc::channel();

        let page_size = config.page_size;

        let categories = Category::ALL.map(|category| {
            FileListView::new(
                category.display_name(),
                "file",
                &format!("No {} yet.", category.display_name().to_lowercase()),
                ListFilter::for_category(category.tag()),
                page_size,
            )
        });

        let app = Self {
            theme: Theme::default(),
            main_view: MainView::Dashboard,
            focus: Focus::Browse,
            event_tx,
            event_rx,
            task_tx,
            store: FileStore::new(seed),
            uploads: Uploads::new(),
            dashboard: FileListView::new(
                "Recent files",
                "file",
                "No files yet. Use :upload <path> to add one.",
                ListFilter::all(),
                config.dashboard_page_size,
            ),
            categories,
            favourites: FileListView::new(
                "Favorite Files",
                "favorite file",
                "Files you mark as favorites will appear here.",
                ListFilter::favourites(),
                page_size,
            ),
            shared: FileListView::new(
                "Shared Files",
                "shared file",
                "Nothing has been shared yet.",
                ListFilter::all(),
                page_size,
            ),
            uploads_view: UploadsView::new(),
            commander: Commander::new(),
            status: StatusLine::default(),
            config,
        };

        (app, task_rx)
    }

    /// The list shown on the current page together with the collection it
    /// views, or `None` on pages without a file list.
    pub(crate) fn active_list(&mut self) -> Option<(&mut FileListView, &[FileRecord])> {
        let files = self.store.files();
        let list = match self.main_view {
            MainView::Dashboard => &mut self.dashboard,
            MainView::Category(category) => &mut self.categories[category.index()],
            MainView::Favourites => &mut self.favourites,
            MainView::Shared => &mut self.shared,
            MainView::Uploads => return None,
        };
        Some((list, files))
    }

    pub(crate) fn current_list(&self) -> Option<&FileListView> {
        match self.main_view {
            MainView::Dashboard => Some(&self.dashboard),
            MainView::Category(category) => Some(&self.categories[category.index()]),
            MainView::Favourites => Some(&self.favourites),
            MainView::Shared => Some(&self.shared),
            MainView::Uploads => None,
        }
    }

    /// Brings every list page back into range after the collection changed.
    pub(crate) fn clamp_lists(&mut self) {
        let files = self.store.files();
        std::iter::once(&mut self.dashboard)
            .chain(self.categories.iter_mut())
            .chain([&mut self.favourites, &mut self.shared])
            .for_each(|list| list.clamp(files));
        debug!(version = self.store.version(), "refreshed list pages");
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let log_path = logging::init().ok();

    let config = config::load_config();
    info!(?log_path, user = %config.user_name, "starting");

    let seed = load_seed(&config);

    let (mut app, task_rx) = App::new(config, seed);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!(error = %e, "application error");
    }

    res.context("Application error occurred")
}

/// Loads the configured seed file, falling back to the built-in collection
/// if there is none or it cannot be read.
fn load_seed(config: &AppConfig) -> Vec<FileRecord> {
    let Some(seed_file) = &config.seed_file else {
        return fixture::mock_files();
    };

    match fixture::load_seed(Path::new(seed_file)) {
        Ok(seed) => {
            if !seed.duplicates.is_empty() {
                warn!(duplicates = ?seed.duplicates, "ignored seed records with duplicate ids");
            }
            info!(count = seed.files.len(), %seed_file, "loaded seed file");
            seed.files
        }
        Err(e) => {
            warn!(error = %e, %seed_file, "failed to load seed file, using built-in files");
            fixture::mock_files()
        }
    }
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == event::KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "failed to read terminal event");
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_wraps_in_both_directions() {
        assert_eq!(MainView::Dashboard.next(), MainView::Category(Category::Pictures));
        assert_eq!(MainView::Uploads.next(), MainView::Dashboard);
        assert_eq!(MainView::Dashboard.previous(), MainView::Uploads);
        assert_eq!(MainView::all().len(), 8);
    }

    #[test]
    fn missing_seed_files_fall_back_to_the_built_in_files() {
        let config = AppConfig {
            seed_file: Some("/definitely/not/here.json".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(load_seed(&config), fixture::mock_files());
    }

    #[test]
    fn each_category_page_only_lists_its_files() {
        let (mut app, _tasks) = App::new(AppConfig::default(), fixture::mock_files());
        app.main_view = MainView::Category(Category::Documents);

        let (list, files) = app.active_list().unwrap();
        let names: Vec<&str> = list.visible(files).iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Resume", "Project Report", "Budget Spreadsheet"]);
    }
}
