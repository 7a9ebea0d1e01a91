//! Message processing for the offerdesk application.
//!
//! Background tasks report through [`AppMessage`]; this module applies those
//! results to the state and runs the effects the NFT picker asks for.

use super::{App, AppMessage, ImportOrigin, PickerEffect, PopupState, Screen};
use crate::client::WalletApi;
use crate::constants::TOAST_SHORT_TICKS;

impl<W: WalletApi> App<W> {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SyncStatusLoaded(status) => {
                tracing::info!(ticker = %status.unit.ticker, decimals = status.unit.decimals, "wallet unit");
                self.unit = status.unit;
            }
            AppMessage::NftStatusLoaded(status) => {
                self.nft_status = status;
                let effects = match self.ui.popup_state.as_picker_mut() {
                    Some(picker) => picker.set_page_count(status.visible_nfts),
                    None => Vec::new(),
                };
                self.run_picker_effects(effects);
            }
            AppMessage::OffersLoaded(records) => {
                self.offers.set_records(records);
            }
            AppMessage::OffersFailed(error) => {
                tracing::warn!("get_offers failed, keeping previous list: {error}");
            }
            AppMessage::OfferCreated(offer) => {
                self.composer.submitting = false;
                self.ui.open_popup(PopupState::OfferCreated(offer));
            }
            AppMessage::OfferFailed(error) => {
                self.composer.submitting = false;
                self.ui.add_error(error);
            }
            AppMessage::OfferImported(ImportOrigin::Composer) => {
                self.drafts.clear();
                self.composer = super::ComposerState::default();
                self.ui.dismiss_popup();
                self.navigate(Screen::Offers);
                self.ui.show_toast("Offer saved", TOAST_SHORT_TICKS);
            }
            AppMessage::OfferImported(ImportOrigin::Viewer) => {
                self.navigate(Screen::Offers);
                self.ui.show_toast("Offer imported", TOAST_SHORT_TICKS);
            }
            AppMessage::ImportFailed(origin, error) => {
                if origin == ImportOrigin::Viewer
                    && let Screen::ViewOffer(view) = &mut self.screen
                {
                    view.importing = false;
                }
                self.ui.add_error(error);
            }

            // === NFT Picker ===
            AppMessage::NftPageLoaded { page, nfts } => {
                let effects = match self.ui.popup_state.as_picker_mut() {
                    Some(picker) => picker.on_page_loaded(page, nfts, &mut self.thumbnails),
                    None => Vec::new(),
                };
                self.run_picker_effects(effects);
            }
            AppMessage::NftPageFailed { page, error } => {
                if let Some(picker) = self.ui.popup_state.as_picker_mut() {
                    picker.on_page_failed(page);
                }
                self.ui.add_error(error);
            }
            AppMessage::SelectedNftLoaded(nft) => {
                let effects = match self.ui.popup_state.as_picker_mut() {
                    Some(picker) => picker.on_selected_loaded(*nft, &mut self.thumbnails),
                    None => Vec::new(),
                };
                self.run_picker_effects(effects);
            }
            AppMessage::SelectedNftFailed(error) => {
                self.ui.add_error(error);
            }
            AppMessage::ThumbnailLoaded { nft_id, data } => {
                // Merged even when the picker has moved on; the cache only grows.
                self.thumbnails.merge(&nft_id, data.as_ref());
                tracing::debug!(
                    nft_id = %nft_id,
                    cached = self.thumbnails.cached_count(),
                    "thumbnail merged"
                );
                if let Some(picker) = self.ui.popup_state.as_picker_mut() {
                    picker.on_thumbnail_merged(&self.thumbnails);
                }
            }

            // === Profiles ===
            AppMessage::DidsLoaded(dids) => {
                self.profiles.set_dids(dids);
            }
            AppMessage::DidsFailed(error) => {
                // The poller repeats the same failure every tick.
                if !self.ui.errors.contains(&error) {
                    self.ui.add_error(error);
                }
            }
            AppMessage::DidUpdated => {
                self.load_dids();
            }
            AppMessage::DidUpdateFailed(error) => {
                self.ui.add_error(error);
            }
            AppMessage::DidCreated(response) => {
                if let Screen::CreateProfile(form) = &mut self.screen {
                    form.submitting = false;
                }
                self.ui.open_popup(PopupState::ProfileCreated(response));
            }
            AppMessage::DidCreateFailed(error) => {
                if let Screen::CreateProfile(form) = &mut self.screen {
                    form.submitting = false;
                }
                self.ui.add_error(error);
            }

            AppMessage::WalletError(error) => {
                self.ui.add_error(error);
            }
        }
    }

    // ========================================================================
    // Picker Effects
    // ========================================================================

    /// Spawns one task per effect. Results come back as messages.
    pub(crate) fn run_picker_effects(&self, effects: Vec<PickerEffect>) {
        for effect in effects {
            match effect {
                PickerEffect::FetchPage { page, query } => {
                    let client = self.client.clone();
                    let message_tx = self.message_tx.clone();
                    tokio::spawn(async move {
                        let message = match client.get_nfts(query).await {
                            Ok(nfts) => AppMessage::NftPageLoaded { page, nfts },
                            Err(e) => AppMessage::NftPageFailed {
                                page,
                                error: e.to_string(),
                            },
                        };
                        // Receiver may be dropped during shutdown - safe to ignore
                        let _ = message_tx.send(message);
                    });
                }
                PickerEffect::FetchSelected { nft_id } => {
                    let client = self.client.clone();
                    let message_tx = self.message_tx.clone();
                    tokio::spawn(async move {
                        let message = match client.get_nft(nft_id).await {
                            Ok(nft) => AppMessage::SelectedNftLoaded(Box::new(nft)),
                            Err(e) => AppMessage::SelectedNftFailed(e.to_string()),
                        };
                        let _ = message_tx.send(message);
                    });
                }
                PickerEffect::FetchThumbnails { nft_ids } => {
                    for nft_id in nft_ids {
                        self.fetch_thumbnail(nft_id);
                    }
                }
            }
        }
    }

    /// A failed fetch still reports back so the id leaves the in-flight set.
    fn fetch_thumbnail(&self, nft_id: String) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let data = match client.get_nft_data(nft_id.clone()).await {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(%nft_id, "get_nft_data failed: {e}");
                    None
                }
            };
            let _ = message_tx.send(AppMessage::ThumbnailLoaded { nft_id, data });
        });
    }
}
