//! Theme and styling constants for the offerdesk TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::OfferRecordStatus;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Offered side of a trade.
pub const OFFERED_COLOR: Color = Color::Yellow;

/// Requested side of a trade.
pub const REQUESTED_COLOR: Color = Color::Green;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for selected items in lists.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Style for the row being edited.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Style for key names in hint lines.
pub const KEY_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Badge color for an offer status.
#[must_use]
pub const fn status_color(status: OfferRecordStatus) -> Color {
    match status {
        OfferRecordStatus::Active => WARNING_COLOR,
        OfferRecordStatus::Completed => SUCCESS_COLOR,
        OfferRecordStatus::Cancelled | OfferRecordStatus::Expired => MUTED_COLOR,
    }
}
