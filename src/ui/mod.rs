//! UI rendering module for the offerdesk TUI.
//!
//! # Module Structure
//!
//! - `panels` - One panel per screen (offers, composer, viewer, profiles)
//! - `popups` - Modal dialogs and the error overlay
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` - Header bar rendering
//! - `footer` - Footer key hints
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::client::WalletApi;
use crate::state::{App, PopupState, Screen};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders the whole application.
///
/// Draw order, bottom to top: screen, popup, oldest queued error, toast.
pub fn render<W: WalletApi>(app: &App<W>, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    header::render(frame, layout.header, app);
    render_screen(app, frame, layout.body);
    footer::render(frame, layout.footer, app.input_context());

    render_popup(app, frame, size);

    if let Some(error) = app.ui.current_error() {
        popups::message::render_error(frame, size, error, app.ui.errors.len());
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

fn render_screen<W: WalletApi>(app: &App<W>, frame: &mut Frame, area: Rect) {
    match &app.screen {
        Screen::Offers => panels::offers::render(frame, area, &app.offers),
        Screen::MakeOffer => panels::composer::render(frame, area, app),
        Screen::ViewOffer(view) => panels::offer_view::render(frame, area, view),
        Screen::Profiles => panels::profiles::render(frame, area, &app.profiles),
        Screen::CreateProfile(form) => {
            panels::create_profile::render(frame, area, form, &app.unit.ticker);
        }
    }
}

fn render_popup<W: WalletApi>(app: &App<W>, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::None => {}
        PopupState::OfferCreated(offer) => popups::offer_created::render(frame, area, offer),
        PopupState::OfferInput(text) => popups::text_input::render(
            frame,
            area,
            "View Offer",
            "Paste or type an offer:",
            text,
        ),
        PopupState::Rename(form) => {
            popups::text_input::render(frame, area, "Rename Profile", "New name:", &form.name);
        }
        PopupState::NftPicker(picker) => {
            popups::nft_picker::render(frame, area, picker, app.drafts.get(), &app.thumbnails);
        }
        PopupState::ProfileCreated(response) => {
            popups::profile_created::render(frame, area, response, &app.unit);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
