//! Application actions for offerdesk.
//!
//! Navigation, backend calls, clipboard operations, and the offer workflow:
//! submit, save, cancel, view, and import.

use super::composer::{self, ComposerField};
use super::platform::ClipboardError;
use super::profiles::visibility_toggle;
use super::{App, AppMessage, ImportOrigin, NftPicker, OfferView, PopupState, Screen};
use crate::client::WalletApi;
use crate::constants::{TOAST_LONG_TICKS, TOAST_SHORT_TICKS};
use crate::domain::{AssetSet, Side, UpdateDid};

impl<W: WalletApi> App<W> {
    // ========================================================================
    // Navigation
    // ========================================================================

    /// Switches screens.
    ///
    /// The offer list redirects to the composer while a draft is pending. The
    /// profile poller runs only while the Profiles screen is shown.
    pub(crate) fn navigate(&mut self, screen: Screen) {
        let screen = if matches!(screen, Screen::Offers) && self.drafts.has_pending() {
            tracing::debug!("offer draft pending, redirecting to composer");
            Screen::MakeOffer
        } else {
            screen
        };

        match &screen {
            Screen::Offers => self.load_offers(),
            Screen::MakeOffer => self.composer.normalize(self.drafts.get()),
            Screen::Profiles => {
                if self.profile_poller.is_none() {
                    self.start_profile_poller();
                }
            }
            Screen::ViewOffer(_) | Screen::CreateProfile(_) => {}
        }
        if !matches!(screen, Screen::Profiles) {
            self.stop_profile_poller();
        }

        tracing::debug!(screen = screen.title(), "navigate");
        self.screen = screen;
    }

    // ========================================================================
    // Listings
    // ========================================================================

    pub(crate) fn load_offers(&self) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.get_offers().await {
                Ok(offers) => AppMessage::OffersLoaded(offers),
                Err(e) => AppMessage::OffersFailed(e.to_string()),
            };
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(message);
        });
    }

    pub(crate) fn load_dids(&self) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.get_dids().await {
                Ok(dids) => AppMessage::DidsLoaded(dids),
                Err(e) => AppMessage::DidsFailed(e.to_string()),
            };
            let _ = message_tx.send(message);
        });
    }

    // ========================================================================
    // Offer Workflow
    // ========================================================================

    /// Sends `make_offer` for the current draft.
    ///
    /// Does nothing while the draft has a validation problem or a request is
    /// already in flight.
    pub(crate) fn submit_offer(&mut self) {
        if !self.can_submit() {
            tracing::debug!(blocker = ?self.submit_blocker(), "submit disabled");
            return;
        }
        let request = match composer::build_request(
            self.drafts.get(),
            self.decimals(),
            composer::now_seconds(),
        ) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("make_offer request not built: {e}");
                return;
            }
        };

        self.composer.submitting = true;
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.make_offer(request).await {
                Ok(response) => AppMessage::OfferCreated(response.offer),
                Err(e) => AppMessage::OfferFailed(e.to_string()),
            };
            let _ = message_tx.send(message);
        });
    }

    /// Imports the offer shown in the created dialog. The draft is cleared once
    /// the import succeeds.
    pub(crate) fn save_created_offer(&self) {
        let PopupState::OfferCreated(offer) = &self.ui.popup_state else {
            return;
        };
        self.spawn_import(offer.clone(), ImportOrigin::Composer);
    }

    /// Drops the draft and returns to the offer list.
    pub(crate) fn cancel_offer(&mut self) {
        self.drafts.clear();
        self.composer = super::ComposerState::default();
        self.ui.dismiss_popup();
        self.navigate(Screen::Offers);
    }

    /// Opens the detail view for an offer string. Blank input does nothing.
    pub(crate) fn view_offer(&mut self, input: &str) {
        let Some(view) = OfferView::open(input) else {
            return;
        };
        tracing::debug!(route_len = view.route.len(), "viewing offer");
        self.ui.dismiss_popup();
        self.navigate(Screen::ViewOffer(view));
    }

    pub(crate) fn import_viewed_offer(&mut self) {
        let Screen::ViewOffer(view) = &mut self.screen else {
            return;
        };
        if view.importing {
            return;
        }
        view.importing = true;
        let offer = view.offer.clone();
        self.spawn_import(offer, ImportOrigin::Viewer);
    }

    fn spawn_import(&self, offer: String, origin: ImportOrigin) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.import_offer(offer).await {
                Ok(()) => AppMessage::OfferImported(origin),
                Err(e) => AppMessage::ImportFailed(origin, e.to_string()),
            };
            let _ = message_tx.send(message);
        });
    }

    // ========================================================================
    // Composer Editing
    // ========================================================================

    /// Adds an entry to the side of the focused row and focuses it.
    pub(crate) fn add_entry(&mut self, kind: EntryKind) {
        let side = self.composer.focus.side();
        let (edit, focus): (fn(&AssetSet) -> AssetSet, ComposerField) = match kind {
            EntryKind::Native => (AssetSet::with_native_enabled, ComposerField::Native(side)),
            EntryKind::Nft => (AssetSet::with_nft_added, ComposerField::Nft(side, 0)),
            EntryKind::Token => (
                AssetSet::with_token_added,
                ComposerField::TokenAssetId(side, 0),
            ),
        };
        self.drafts.update_side(side, edit);
        self.composer.focus = focus;
    }

    pub(crate) fn remove_focused_entry(&mut self) {
        let draft = composer::without_field(self.drafts.get(), self.composer.focus);
        self.drafts.set(draft);
        self.composer.normalize(self.drafts.get());
    }

    pub(crate) fn toggle_expiration(&mut self) {
        let draft = composer::with_expiration_toggled(self.drafts.get());
        self.drafts.set(draft);
        self.composer.normalize(self.drafts.get());
    }

    /// Types `c` into the focused field if the field takes it.
    pub(crate) fn type_into_composer(&mut self, c: char) {
        let field = self.composer.focus;
        if !field.accepts(c) {
            return;
        }
        let Some(current) = composer::field_value(self.drafts.get(), field) else {
            return;
        };
        let value = format!("{current}{c}");
        let draft = composer::with_field_value(self.drafts.get(), field, value);
        self.drafts.set(draft);
    }

    pub(crate) fn backspace_in_composer(&mut self) {
        let field = self.composer.focus;
        if !field.is_text() {
            return;
        }
        let Some(current) = composer::field_value(self.drafts.get(), field) else {
            return;
        };
        let mut value = current.to_string();
        value.pop();
        let draft = composer::with_field_value(self.drafts.get(), field, value);
        self.drafts.set(draft);
    }

    // ========================================================================
    // NFT Picker
    // ========================================================================

    pub(crate) fn open_picker(&mut self, side: Side, slot: usize) {
        let Some(nft_id) = self.drafts.get().side(side).nfts.get(slot) else {
            return;
        };
        let mut picker = NftPicker::new(side, slot, nft_id.clone(), self.nft_status.visible_nfts);
        let effects = picker.open();
        self.ui.open_popup(PopupState::NftPicker(Box::new(picker)));
        self.run_picker_effects(effects);
    }

    /// Writes the highlighted NFT into the picker's slot. The picker stays
    /// open and shows the new selection.
    pub(crate) fn choose_nft(&mut self) {
        let Some(picker) = self.ui.popup_state.as_picker() else {
            return;
        };
        let Some(nft_id) = picker.choose(self.drafts.get()) else {
            self.ui
                .show_toast("That NFT is already used in this offer", TOAST_LONG_TICKS);
            return;
        };
        let (side, slot) = (picker.side, picker.slot);

        self.drafts
            .update_side(side, |assets| assets.with_nft(slot, nft_id.clone()));
        let effects = match self.ui.popup_state.as_picker_mut() {
            Some(picker) => picker.set_nft_id(nft_id),
            None => Vec::new(),
        };
        self.run_picker_effects(effects);
    }

    pub(crate) fn change_picker_page(&mut self, forward: bool) {
        let effects = match self.ui.popup_state.as_picker_mut() {
            Some(picker) if forward => picker.next_page(),
            Some(picker) => picker.prev_page(),
            None => Vec::new(),
        };
        self.run_picker_effects(effects);
    }

    // ========================================================================
    // Profiles
    // ========================================================================

    pub(crate) fn open_rename(&mut self) {
        if let Some(did) = self.profiles.selected() {
            let form = super::RenameForm::for_did(did);
            self.ui.open_popup(PopupState::Rename(form));
        }
    }

    pub(crate) fn submit_rename(&mut self) {
        let PopupState::Rename(form) = &self.ui.popup_state else {
            return;
        };
        let Some(request) = form.request() else {
            self.ui.show_toast("Name is required", TOAST_LONG_TICKS);
            return;
        };
        self.ui.dismiss_popup();
        self.spawn_update_did(request);
    }

    pub(crate) fn toggle_selected_visibility(&self) {
        if let Some(did) = self.profiles.selected() {
            self.spawn_update_did(visibility_toggle(did));
        }
    }

    fn spawn_update_did(&self, request: UpdateDid) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.update_did(request).await {
                Ok(()) => AppMessage::DidUpdated,
                Err(e) => AppMessage::DidUpdateFailed(e.to_string()),
            };
            let _ = message_tx.send(message);
        });
    }

    pub(crate) fn submit_create_profile(&mut self) {
        let decimals = self.decimals();
        let Screen::CreateProfile(form) = &mut self.screen else {
            return;
        };
        if form.submitting {
            return;
        }
        let request = match form.request(decimals) {
            Ok(request) => request,
            Err(e) => {
                self.ui.show_toast(e.to_string(), TOAST_LONG_TICKS);
                return;
            }
        };
        form.submitting = true;

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.create_did(request).await {
                Ok(response) => AppMessage::DidCreated(Box::new(response)),
                Err(e) => AppMessage::DidCreateFailed(e.to_string()),
            };
            let _ = message_tx.send(message);
        });
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    pub(crate) fn copy_offer(&mut self, offer: &str) {
        match self.clipboard.copy_text(offer) {
            Ok(()) => self.ui.show_toast("Offer copied", TOAST_SHORT_TICKS),
            Err(e) => self.ui.add_error(e),
        }
    }

    /// Reads an offer from the clipboard.
    pub(crate) fn read_clipboard(&mut self) -> Option<String> {
        match self.clipboard.read_text() {
            Ok(text) => Some(text),
            Err(ClipboardError::Empty) => {
                self.ui.show_toast("Clipboard is empty", TOAST_SHORT_TICKS);
                None
            }
            Err(e) => {
                self.ui.add_error(e);
                None
            }
        }
    }

    /// Handles a bracketed paste.
    ///
    /// Text goes into an open text popup or the focused composer field; on the
    /// offer list it opens the pasted offer.
    pub(crate) fn handle_paste(&mut self, text: &str) {
        if !self.ui.errors.is_empty() {
            return;
        }
        if let Some(buffer) = self.ui.popup_state.text_input_mut() {
            buffer.extend(text.chars().filter(|c| !c.is_control()));
            return;
        }
        if self.ui.has_active_popup() {
            return;
        }
        if let Screen::CreateProfile(form) = &mut self.screen {
            for c in text.trim().chars() {
                form.push_char(c);
            }
            return;
        }
        match self.screen {
            Screen::Offers => self.view_offer(text),
            Screen::MakeOffer => {
                for c in text.trim().chars() {
                    self.type_into_composer(c);
                }
            }
            Screen::ViewOffer(_) | Screen::Profiles | Screen::CreateProfile(_) => {}
        }
    }
}

/// Kind of entry the composer add commands create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Native,
    Nft,
    Token,
}
