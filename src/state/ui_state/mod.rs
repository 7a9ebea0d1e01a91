//! UI state management for the offerdesk TUI.
//!
//! This module manages presentation concerns that are not part of any screen:
//! - Popup/modal state
//! - The error queue (the error sink)
//! - Toast notifications

mod popups;

use std::collections::VecDeque;
use std::fmt::Display;

pub use popups::PopupState;

// ============================================================================
// UI State
// ============================================================================

/// Most errors kept at once; older ones are dropped first.
const MAX_QUEUED_ERRORS: usize = 8;

/// UI state: popups, queued errors, and the toast.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.add_error("Wallet error: not synced");
/// ui.show_toast("Offer copied", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// Current popup/modal state.
    pub popup_state: PopupState,

    /// Errors waiting to be acknowledged, oldest first.
    pub errors: VecDeque<String>,

    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    pub fn open_popup(&mut self, popup: PopupState) {
        self.popup_state = popup;
    }

    // ========================================================================
    // Error Sink
    // ========================================================================

    /// Reports a non-fatal error. It is logged and shown above the current view,
    /// which stays as it was.
    pub fn add_error(&mut self, error: impl Display) {
        let message = error.to_string();
        tracing::warn!(error = %message, "reported to user");
        if self.errors.len() == MAX_QUEUED_ERRORS {
            self.errors.pop_front();
        }
        self.errors.push_back(message);
    }

    #[must_use]
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Acknowledges the oldest error.
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    /// * `ticks` - Number of ticks before auto-dismiss
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_state_popup_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.open_popup(PopupState::OfferCreated("offer1abc".to_string()));
        assert!(ui.has_active_popup());

        ui.dismiss_popup();
        assert!(!ui.has_active_popup());
    }

    #[test]
    fn test_errors_stack_above_popup() {
        let mut ui = UiState::new();
        ui.open_popup(PopupState::OfferInput("offer1".to_string()));

        ui.add_error("first");
        ui.add_error("second");
        assert_eq!(ui.current_error(), Some("first"));

        ui.dismiss_error();
        assert_eq!(ui.current_error(), Some("second"));
        ui.dismiss_error();
        assert_eq!(ui.current_error(), None);

        // The popup underneath is untouched.
        assert_eq!(ui.popup_state, PopupState::OfferInput("offer1".to_string()));
    }

    #[test]
    fn test_error_queue_is_bounded() {
        let mut ui = UiState::new();
        for i in 0..MAX_QUEUED_ERRORS + 3 {
            ui.add_error(i);
        }
        assert_eq!(ui.errors.len(), MAX_QUEUED_ERRORS);
        assert_eq!(ui.current_error(), Some("3"));
    }

    #[test]
    fn test_ui_state_toast_lifecycle() {
        let mut ui = UiState::new();
        assert!(ui.toast.is_none());

        ui.show_toast("Hello", 2);
        assert_eq!(
            ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
            Some("Hello")
        );

        assert!(!ui.tick_toast()); // 2 -> 1
        assert!(ui.tick_toast()); // 1 -> removed
        assert!(ui.toast.is_none());
    }
}
