//! UI helper functions for creating styled blocks and text lines.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::constants::CURSOR_SYMBOL;
use crate::theme::{
    BORDER_STYLE, ERROR_COLOR, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, HIGHLIGHT_STYLE,
    KEY_STYLE, MUTED_COLOR,
};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// Focused blocks get a double border and a `●` marker in the title.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

/// Popup block for errors.
#[must_use]
pub fn create_error_block(title: &str) -> Block<'_> {
    create_popup_block(title)
        .border_style(Style::new().fg(ERROR_COLOR))
        .title_style(Style::new().fg(ERROR_COLOR).add_modifier(Modifier::BOLD))
}

// ============================================================================
// Text Helpers
// ============================================================================

/// Renders `[("Enter", "save"), ("Esc", "close")]` as `Enter:save  Esc:close`.
#[must_use]
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, KEY_STYLE));
        spans.push(Span::styled(format!(":{action}"), Style::new().fg(MUTED_COLOR)));
    }
    Line::from(spans)
}

/// A `label: value` row with a cursor marker when focused.
///
/// A blank value shows `placeholder` dimmed instead.
#[must_use]
pub fn field_line(label: &str, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let marker = if focused { CURSOR_SYMBOL } else { "  " };
    let value_span = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::new().fg(Color::DarkGray))
    } else {
        Span::raw(value.to_string())
    };
    let mut line = Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{label}: "), Style::new().fg(MUTED_COLOR)),
        value_span,
    ]);
    if focused {
        line = line.style(HIGHLIGHT_STYLE);
    }
    line
}

// ============================================================================
// Tests
// ============================================================================
