//! Error popup.
//!
//! Sizes itself to the text and is drawn last, so it sits above any other
//! popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Clear, Paragraph, Wrap},
};

use super::render_help;
use crate::theme::ERROR_COLOR;
use crate::ui::helpers::{create_error_block, key_hints};
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders the oldest queued error. `queued` counts all pending errors.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str, queued: usize) {
    let title = if queued > 1 {
        format!("Error (1 of {queued})")
    } else {
        "Error".to_string()
    };
    let popup_area = sized_area(area, error);
    draw(
        frame,
        popup_area,
        create_error_block(&title),
        error,
        Style::default().fg(ERROR_COLOR),
    );
    render_help(frame, popup_area, key_hints(&[("Esc", "dismiss")]));
}

// ============================================================================
// Internals
// ============================================================================

fn sized_area(area: Rect, text: &str) -> Rect {
    let lines = u16::try_from(text.lines().count().max(1)).unwrap_or(u16::MAX);
    let longest = text
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let longest = u16::try_from(longest).unwrap_or(u16::MAX);

    let width = longest
        .saturating_add(6)
        .max(40)
        .min(area.width * 8 / 10);
    let height = lines.saturating_add(5).max(7);
    centered_popup_area(area, width, height)
}

fn draw(frame: &mut Frame, popup_area: Rect, block: Block<'_>, text: &str, style: Style) {
    frame.render_widget(Clear, popup_area);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(2),
    );
    let paragraph = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, text_area);
}

// ============================================================================
// Tests
// ============================================================================
