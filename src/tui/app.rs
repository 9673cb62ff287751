//! TUI application state and event handling.
//!
//! The `App` struct owns the [`SearchList`] and everything the screen adds around it:
//!
//! - **Event loop**: polls terminal input with a timeout bounded by the pending debounce, so a
//!   filter pass lands on time even when the user stops typing
//! - **Mouse mapping**: clicks on the clear button or on a row are resolved against the areas
//!   from the last draw
//! - **Status messages**: transient feedback for clipboard operations
//! - **Dirty state tracking**: redraws only when state changes, plus a periodic redraw
//!
//! # Example
//!
//! ```rust,ignore
//! let mut app = App::new(SearchList::new(items), theme, "sample data".into());
//! app.run(&mut terminal)?;
//! let selected = app.selected_items();
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Margin, Position};
use ratatui::widgets::ListState;
use tracing::{info, warn};

use super::events::{Action, poll_event};
use super::layout::AppLayout;
use super::rendering::{RenderState, render_ui};
use super::theme::Theme;
use crate::clipboard::{copy_to_clipboard, selection_text};
use crate::list::{PAGE_SIZE, SearchList};
use crate::models::Item;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Upper bound on the input poll, also the periodic redraw interval
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    list: SearchList,
    theme: Theme,
    source_label: String,
    list_state: ListState,
    // Areas from the last draw, for mouse hit testing
    layout: Option<AppLayout>,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(list: SearchList, theme: Theme, source_label: String) -> Self {
        Self {
            list,
            theme,
            source_label,
            list_state: ListState::default(),
            layout: None,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Selection at the time of the call
    pub fn selected_items(&self) -> Vec<Item> {
        self.list.selection().items().to_vec()
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(items = self.list.data().len(), "search list mounted");

        while !self.should_quit {
            self.check_and_clear_expired_status();

            if self.list.tick(Instant::now()) {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= FRAME_INTERVAL {
                self.draw(terminal)?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(self.poll_timeout(Instant::now()))?;
            self.handle_action(action, Instant::now());
        }

        self.list.teardown();
        info!(selected = self.list.selection().len(), "search list closed");
        Ok(())
    }

    /// How long to wait for input: one frame, or less when a filter pass is due sooner
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.list
            .time_until_filter(now)
            .map_or(FRAME_INTERVAL, |remaining| remaining.min(FRAME_INTERVAL))
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut layout = None;
        terminal.draw(|f| {
            let state = RenderState {
                list: &self.list,
                theme: &self.theme,
                status_message: self.status_message.as_ref(),
                source_label: &self.source_label,
            };
            layout = Some(render_ui(f, &state, &mut self.list_state));
        })?;
        self.layout = layout;
        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                self.list.clear_search(now);
                self.needs_redraw = true;
            }
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-(PAGE_SIZE as isize)),
            Action::PageDown => self.move_cursor(PAGE_SIZE as isize),
            Action::ToggleCurrent => {
                if self.list.toggle_current().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::CopySelection => self.copy_selection(),
            Action::UpdateSearch(c) => {
                self.list.push_char(c, now);
                self.needs_redraw = true;
            }
            Action::DeleteChar => {
                if self.list.pop_char(now) {
                    self.needs_redraw = true;
                }
            }
            Action::Click { column, row } => self.handle_click(column, row, now),
            Action::Resize => self.needs_redraw = true,
            Action::None => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let old_idx = self.list.cursor();
        self.list.move_cursor(delta);
        if old_idx != self.list.cursor() {
            self.needs_redraw = true;
        }
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(layout) = self.layout else {
            return;
        };
        let position = Position { x: column, y: row };

        if layout.clear_area.contains(position) {
            self.list.clear_search(now);
            self.needs_redraw = true;
            return;
        }

        // Rows start inside the top border
        let inner = layout.list_area.inner(Margin::new(1, 1));
        if inner.contains(position) {
            let index = self.list_state.offset() + (row - inner.y) as usize;
            if self.list.toggle_at(index).is_some() {
                self.needs_redraw = true;
            }
        }
    }

    fn copy_selection(&mut self) {
        let selected = self.list.selection().items();
        if selected.is_empty() {
            self.set_status(
                "✗ Nothing selected to copy",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
            return;
        }

        let count = selected.len();
        match copy_to_clipboard(&selection_text(selected)) {
            Ok(()) => {
                info!(count, "copied selection to clipboard");
                let noun = if count == 1 { "item" } else { "items" };
                self.set_status(
                    format!("✓ Copied {} {} to clipboard", count, noun),
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }
}
