pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::terminal_prefers_dark;
pub use paths::{format_path_with_tilde, validate_file_size};
pub use terminal::sanitize_row_text;
