//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Startup data fetching and the profile poller

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::client::{WalletApi, WalletClient};
use crate::constants::TICK_RATE;
use crate::domain::{NftStatus, WalletError};
use crate::tui::Tui;
use crate::ui;

use super::{
    App, AppConfig, AppMessage, ComposerState, OfferDraftStore, OffersState, ProfilesState,
    Screen, ThumbnailCache, UiState,
};

// ============================================================================
// Construction
// ============================================================================

impl App<WalletClient> {
    /// Creates an app talking to the wallet at `config.rpc_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let client = WalletClient::new(config.rpc_url.clone(), config.request_timeout())
            .map_err(WalletError::into_report)?;
        tracing::info!(rpc_url = client.base_url(), "wallet client ready");
        Ok(Self::new(config, client))
    }
}

impl<W: WalletApi> App<W> {
    /// Creates a new App on the Offers screen with an empty draft.
    #[must_use]
    pub fn new(config: AppConfig, client: W) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let clipboard = config.clipboard();

        Self {
            screen: Screen::Offers,
            drafts: OfferDraftStore::new(),
            composer: ComposerState::default(),
            offers: OffersState::default(),
            profiles: ProfilesState::default(),
            thumbnails: ThumbnailCache::new(),
            ui: UiState::new(),
            unit: config.fallback_unit(),
            nft_status: NftStatus::default(),
            config,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            profile_poller: None,
            client,
            clipboard,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.initial_data_fetch();
        self.navigate(Screen::Offers);

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Paste(text) => {
                        self.handle_paste(&text);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        self.stop_profile_poller();
        Ok(())
    }

    // ========================================================================
    // Startup
    // ========================================================================

    /// Fetches the wallet unit and NFT counts.
    pub(crate) fn initial_data_fetch(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            let (sync_status, nft_status) =
                tokio::join!(client.get_sync_status(), client.get_nft_status());

            // Channel sends below: receiver may be dropped during shutdown - safe to ignore
            match sync_status {
                Ok(status) => {
                    let _ = message_tx.send(AppMessage::SyncStatusLoaded(status));
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::WalletError(e.to_string()));
                }
            }
            match nft_status {
                Ok(status) => {
                    let _ = message_tx.send(AppMessage::NftStatusLoaded(status));
                }
                Err(e) => {
                    tracing::warn!("get_nft_status failed: {e}");
                }
            }
        });
    }

    // ========================================================================
    // Profile Poller
    // ========================================================================

    /// Starts listing DIDs now and on every poll interval after.
    pub(crate) fn start_profile_poller(&mut self) {
        self.stop_profile_poller();

        let message_tx = self.message_tx.clone();
        let client = self.client.clone();
        let period = self.config.profile_poll_interval();

        tracing::debug!(?period, "starting profile poller");
        self.profile_poller = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                ticker.tick().await;
                let message = match client.get_dids().await {
                    Ok(dids) => AppMessage::DidsLoaded(dids),
                    Err(e) => AppMessage::DidsFailed(e.to_string()),
                };
                if message_tx.send(message).is_err() {
                    break;
                }
            }
        }));
    }

    pub(crate) fn stop_profile_poller(&mut self) {
        if let Some(poller) = self.profile_poller.take() {
            tracing::debug!("stopping profile poller");
            poller.abort();
        }
    }
}

impl<W: WalletApi> Drop for App<W> {
    fn drop(&mut self) {
        self.stop_profile_poller();
    }
}
