use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::theme::Theme;
use crate::list::SearchList;
use crate::utils::sanitize_row_text;

pub const SEARCH_PLACEHOLDER: &str = "Search.......";
pub const CLEAR_LABEL: &str = "Clear";

/// Everything the renderer reads besides the list widget state
pub struct RenderState<'a> {
    pub list: &'a SearchList,
    pub theme: &'a Theme,
    pub status_message: Option<&'a StatusMessage>,
    pub source_label: &'a str,
}

/// Render the entire UI and return the areas used, for mapping mouse clicks
pub fn render_ui(frame: &mut Frame, state: &RenderState, list_state: &mut ListState) -> AppLayout {
    let area = frame.area();
    let layout = AppLayout::new(area);
    let theme = state.theme;

    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    render_search_bar(frame, layout.search_area, state.list, theme);
    render_clear_button(frame, layout.clear_area, theme);
    render_item_list(frame, layout.list_area, state.list, theme, list_state);
    render_status_bar(frame, layout.status_area, state);

    layout
}

fn bordered(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(title.to_string())
}

fn render_search_bar(frame: &mut Frame, area: Rect, list: &SearchList, theme: &Theme) {
    let term = list.search_term();
    let line = if term.is_empty() {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.muted)))
    } else {
        Line::from(Span::styled(sanitize_row_text(term), Style::default().fg(theme.text)))
    };

    let paragraph = Paragraph::new(line).block(bordered(" Search ", theme));
    frame.render_widget(paragraph, area);

    // Keep the cursor inside the input box
    if area.width > 2 && area.height > 2 {
        let typed = sanitize_row_text(term).width() as u16;
        let x = (area.x + 1 + typed).min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_clear_button(frame: &mut Frame, area: Rect, theme: &Theme) {
    let button = Paragraph::new(CLEAR_LABEL)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)));
    frame.render_widget(button, area);
}

fn render_item_list(
    frame: &mut Frame,
    area: Rect,
    list: &SearchList,
    theme: &Theme,
    list_state: &mut ListState,
) {
    let rows = list.displayed();
    let title = format!(" Items ({}/{}) ", rows.len(), list.data().len());

    if rows.is_empty() {
        list_state.select(None);
        let empty = Paragraph::new(Span::styled("No items", Style::default().fg(theme.muted)))
            .block(bordered(&title, theme));
        frame.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = rows
        .iter()
        .map(|item| {
            let label = list.label_for(item);
            let label_style = if list.is_selected(item) {
                Style::default().fg(theme.selected_label).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            ListItem::new(row_line(item.display_name(), label, inner_width, label_style))
                .style(Style::default().fg(theme.text))
        })
        .collect();

    let widget = List::new(items).block(bordered(&title, theme)).highlight_style(
        Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD),
    );

    list_state.select(Some(list.cursor()));
    frame.render_stateful_widget(widget, area, list_state);
}

/// One row: name on the left, label flush right, name truncated with an ellipsis if needed
fn row_line(name: &str, label: &'static str, width: usize, label_style: Style) -> Line<'static> {
    let name = sanitize_row_text(name);
    let label_width = label.width();
    let max_name = width.saturating_sub(label_width + 1);

    let name = if name.width() > max_name { truncate_to_width(&name, max_name) } else { name };

    let name_width = name.width();
    let padding = if name.is_empty() {
        width.saturating_sub(label_width)
    } else {
        width.saturating_sub(name_width + label_width).max(1)
    };

    Line::from(vec![
        Span::raw(name),
        Span::raw(" ".repeat(padding)),
        Span::styled(label, label_style),
    ])
}

/// Cut `text` to at most `max_width` columns, ending in an ellipsis
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let theme = state.theme;
    let list = state.list;

    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => theme.selected_label,
            MessageType::Error => theme.error,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(theme.status_bg))
    } else {
        let mut parts = vec![
            format!("{}/{} items", list.displayed_len(), list.data().len()),
            format!("{} selected", list.selection().len()),
        ];

        // Typed term not yet applied to the rows
        if list.is_filter_pending()
            && list.effective_filter().unwrap_or_default() != list.search_term()
        {
            parts.push("filtering…".to_string());
        }

        parts.push(state.source_label.to_string());
        parts.push("Enter: toggle".to_string());
        if !list.search_term().is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+Y: copy".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(theme.status_fg).bg(theme.status_bg))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
