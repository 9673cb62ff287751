use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the clear button, borders included
const CLEAR_BUTTON_WIDTH: u16 = 9;

/// Screen layout: search row on top, item list, status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub search_area: Rect,
    pub clear_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the screen layout:
    /// - Search input with the clear button to its right (3 rows)
    /// - Item list filling the middle
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search row
                Constraint::Min(3),    // Item list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let search_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(CLEAR_BUTTON_WIDTH)])
            .split(vertical_chunks[0]);

        Self {
            search_area: search_chunks[0],
            clear_area: search_chunks[1],
            list_area: vertical_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
