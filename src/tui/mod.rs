// TUI module for the interactive selectable search list
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
pub mod theme;

use anyhow::Result;
pub use app::App;
pub use theme::{Appearance, Theme, ThemeChoice};

use self::terminal::TerminalManager;
use crate::list::SearchList;
use crate::models::Item;

/// Run the interactive TUI and return the final selection
pub fn run_interactive(
    list: SearchList,
    appearance: Appearance,
    source_label: String,
) -> Result<Vec<Item>> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(list, Theme::for_appearance(appearance), source_label);
    let res = app.run(manager.terminal_mut());

    // Restore before reporting any loop error so it lands on the normal screen
    manager.restore()?;
    res?;

    Ok(app.selected_items())
}
