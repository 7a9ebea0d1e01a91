//! Popup UI components for the offerdesk TUI.
//!
//! Popups are modal overlays drawn above the current screen. Queued errors use
//! [`message::render_error`] and draw above any popup.

pub mod message;
pub mod nft_picker;
pub mod offer_created;
pub mod profile_created;
pub mod text_input;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

/// Draws a separator over the second-to-last inner row and `help` on the last.
pub(crate) fn render_help(frame: &mut Frame, popup_area: Rect, help: Line<'static>) {
    if popup_area.height < 4 || popup_area.width < 3 {
        return;
    }
    let separator_area = Rect::new(
        popup_area.x + 1,
        popup_area.y + popup_area.height - 3,
        popup_area.width - 2,
        1,
    );
    let separator = "─".repeat(usize::from(separator_area.width));
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(
        popup_area.x + 1,
        popup_area.y + popup_area.height - 2,
        popup_area.width - 2,
        1,
    );
    frame.render_widget(
        Paragraph::new(help).alignment(Alignment::Center),
        help_area,
    );
}
