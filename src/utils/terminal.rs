//! Terminal output sanitization
//!
//! Item names come from user-supplied data files. An embedded escape sequence could clear the
//! screen or move the cursor when a row is drawn, and a newline would break the one-row-per-item
//! layout. Names go through [`sanitize_row_text`] before they reach the frame.

/// Strips ANSI CSI sequences and control characters and flattens whitespace controls.
///
/// Tabs, newlines and carriage returns become single spaces so the text fits on one row.
///
/// # Examples
///
/// ```
/// use search_select::utils::sanitize_row_text;
///
/// assert_eq!(sanitize_row_text("\x1b[31mRed\x1b[0m\napple"), "Red apple");
/// ```
pub fn sanitize_row_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // CSI sequence: ESC [ params final-letter
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        match ch {
            '\t' | '\n' | '\r' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
