//! One panel per screen.
//!
//! - **Offers**: the wallet's offers with a status badge
//! - **Composer**: the offer draft, both sides plus fee and expiration
//! - **Offer view**: a pasted offer ready to import
//! - **Profiles**: DID profiles with hidden/visible handling
//! - **Create profile**: name and fee form

pub mod composer;
pub mod create_profile;
pub mod offer_view;
pub mod offers;
pub mod profiles;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;

/// Centered muted notice for loading and empty states.
pub(crate) fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    let notice = Paragraph::new(text.to_string())
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}
