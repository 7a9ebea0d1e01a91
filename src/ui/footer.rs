//! Footer rendering module for the offerdesk TUI.
//!
//! The footer shows the key bindings of the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Key hints for `context`.
#[must_use]
pub const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Offers => {
            "n:New  Enter:View  v:Enter offer  p:Paste  c:Copy  r:Refresh  2:Profiles  q:Quit"
        }
        InputContext::Composer => {
            "Tab:Next  ^N:NFT  ^T:Token  ^X:Amount  ^D:Remove  ^E:Expiry  ^S:Submit  Esc:Cancel"
        }
        InputContext::OfferView => "Enter:Import  c:Copy  Esc:Back",
        InputContext::Profiles => {
            "n:New  e:Rename  x:Hide/Show  h:Hidden  r:Refresh  1:Offers  q:Quit"
        }
        InputContext::CreateProfile => "Tab:Next field  Enter:Create  Esc:Back",
        InputContext::MessagePopup => "Esc:Close  Enter:Close",
        InputContext::OfferCreated => "c:Copy  Enter:Save  Esc:Close",
        InputContext::TextInput => "Enter:Submit  ^V:Paste  Esc:Cancel",
        InputContext::NftPicker => "↑↓:Move  ←→:Page  Enter:Choose  Esc:Close",
        InputContext::ProfileCreated => "Enter:View profiles  Esc:Close",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, context: InputContext) {
    let footer = Paragraph::new(hints(context))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
