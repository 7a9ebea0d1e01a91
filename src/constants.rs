//! Application constants for the offerdesk TUI.
//!
//! UI dimensions, timings, and wallet-facing limits used across modules.

use std::time::Duration;

// ============================================================================
// Event Loop
// ============================================================================

/// Interval between redraws and toast countdown ticks.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Toast lifetime for short confirmations ("Offer copied").
pub const TOAST_SHORT_TICKS: u8 = 20;

/// Toast lifetime for notices the user may want to read twice.
pub const TOAST_LONG_TICKS: u8 = 40;

// ============================================================================
// Wallet Limits
// ============================================================================

/// NFTs shown per picker page.
pub const NFT_PAGE_SIZE: u32 = 20;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the header bar (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer key hint bar (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Characters of an offer string shown before truncation in lists.
pub const OFFER_PREVIEW_LENGTH: usize = 48;

/// Popup size as a percentage of the terminal.
pub const POPUP_WIDTH_PERCENT: u16 = 70;
pub const POPUP_HEIGHT_PERCENT: u16 = 60;

// ============================================================================
// Display Symbols
// ============================================================================

/// Marker for the focused row.
pub const CURSOR_SYMBOL: &str = "▶ ";

/// Marker for a picker entry used by another slot.
pub const BLOCKED_SYMBOL: &str = "✗";

/// Truncates `text` to `max` characters, ending with `…` when shortened.
#[must_use]
pub fn truncate_middle(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max || max < 3 {
        return text.to_string();
    }
    let keep = max - 1;
    let head = keep.div_ceil(2);
    let tail = keep - head;
    let start: String = text.chars().take(head).collect();
    let end: String = text.chars().skip(count - tail).collect();
    format!("{start}…{end}")
}
