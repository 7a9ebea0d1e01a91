//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner for short confirmations
//! such as "Offer copied".

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::SUCCESS_COLOR;

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;

const TOAST_HEIGHT: u16 = 3;

/// Distance from the right and bottom edges; keeps the footer visible.
const TOAST_MARGIN: u16 = 2;

/// Border plus one space on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let text = Paragraph::new(message)
        .style(Style::default().fg(SUCCESS_COLOR))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(text, toast_area);
}

#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_MARGIN);
    let toast_y = area.y + area.height.saturating_sub(TOAST_HEIGHT + TOAST_MARGIN);

    Rect::new(toast_x, toast_y, toast_width, TOAST_HEIGHT.min(area.height))
}

// ============================================================================
// Tests
// ============================================================================
