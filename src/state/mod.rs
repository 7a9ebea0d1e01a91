//! State management module for the offerdesk TUI application.
//!
//! The [`App`] is the single owner of every piece of view state. Sub-states
//! are grouped by concern:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                             App                              │
//! ├──────────────┬──────────────┬──────────────┬─────────────────┤
//! │ Screen       │ drafts       │ offers       │ ui              │
//! │  - composer  │  - the one   │ profiles     │  - popups       │
//! │  - viewer    │    draft     │ thumbnails   │  - error queue  │
//! │  - forms     │              │              │  - toast        │
//! └──────────────┴──────────────┴──────────────┴─────────────────┘
//! ```
//!
//! Backend calls run in spawned tasks that report back through
//! [`AppMessage`]s; the event loop drains them between frames.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::{WalletApi, WalletClient};
use crate::domain::{
    DidRecord, NftData, NftRecord, NftStatus, OfferRecord, SyncStatus, TransactionResponse, Unit,
};

use platform::ClipboardManager;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod composer;
pub mod config;
pub mod draft;
pub mod nft_picker;
pub mod offers;
pub mod platform;
pub mod profiles;
pub mod thumbnails;
pub mod ui_state;
pub mod viewer;

// ============================================================================
// Re-exports
// ============================================================================

pub use composer::{ComposerError, ComposerField, ComposerState};
pub use config::AppConfig;
pub use draft::OfferDraftStore;
pub use nft_picker::{NftPicker, PickerEffect, PickerPhase};
pub use offers::OffersState;
pub use profiles::{CreateProfileForm, ProfilesState, RenameForm};
pub use thumbnails::ThumbnailCache;
pub use ui_state::{PopupState, UiState};
pub use viewer::OfferView;

// ============================================================================
// Screens
// ============================================================================

/// The screen under any popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Offers,
    MakeOffer,
    ViewOffer(OfferView),
    Profiles,
    CreateProfile(CreateProfileForm),
}

impl Screen {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Offers => "Offers",
            Self::MakeOffer => "Make Offer",
            Self::ViewOffer(_) => "View Offer",
            Self::Profiles => "Profiles",
            Self::CreateProfile(_) => "Create Profile",
        }
    }
}

/// Where an `import_offer` was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOrigin {
    /// Saving a freshly created offer from the composer.
    Composer,
    /// The offer detail view.
    Viewer,
}

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Wallet sync status, carrying the wallet unit.
    SyncStatusLoaded(SyncStatus),
    /// NFT counts, used for the picker page count.
    NftStatusLoaded(NftStatus),
    OffersLoaded(Vec<OfferRecord>),
    OffersFailed(String),
    OfferCreated(String),
    OfferFailed(String),
    OfferImported(ImportOrigin),
    ImportFailed(ImportOrigin, String),
    /// A catalog page for the picker.
    NftPageLoaded { page: u32, nfts: Vec<NftRecord> },
    NftPageFailed { page: u32, error: String },
    /// The record for a picker slot's current value.
    SelectedNftLoaded(Box<NftRecord>),
    SelectedNftFailed(String),
    /// Media for one NFT; `None` when it has none or the fetch failed.
    ThumbnailLoaded {
        nft_id: String,
        data: Option<NftData>,
    },
    DidsLoaded(Vec<DidRecord>),
    DidsFailed(String),
    DidUpdated,
    DidUpdateFailed(String),
    DidCreated(Box<TransactionResponse>),
    DidCreateFailed(String),
    /// Any other wallet error that only needs reporting.
    WalletError(String),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Generic over the wallet backend so tests can drive it with a scripted
/// wallet.
#[derive(Debug)]
pub struct App<W: WalletApi = WalletClient> {
    // ========================================================================
    // Screens and Sub-states
    // ========================================================================
    pub screen: Screen,

    /// The offer draft; survives leaving the composer.
    pub drafts: OfferDraftStore,

    pub composer: ComposerState,

    pub offers: OffersState,

    pub profiles: ProfilesState,

    pub thumbnails: ThumbnailCache,

    /// Popups, queued errors, toast.
    pub ui: UiState,

    // ========================================================================
    // Wallet-reported state
    // ========================================================================
    /// Wallet unit; config fallback until sync status arrives.
    pub unit: Unit,

    pub nft_status: NftStatus,

    // ========================================================================
    // App-level state
    // ========================================================================
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver is only gone
    // during shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// DID poller; runs only while the Profiles screen is shown.
    pub(crate) profile_poller: Option<JoinHandle<()>>,

    // ========================================================================
    // Wallet Client
    // ========================================================================
    pub(crate) client: W,

    pub(crate) clipboard: ClipboardManager,
}

impl<W: WalletApi> App<W> {
    /// Decimals for native amounts and fees.
    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.unit.decimals
    }

    /// Why the composer cannot submit right now, if anything.
    #[must_use]
    pub fn submit_blocker(&self) -> Option<ComposerError> {
        composer::submit_blocker(self.drafts.get(), self.decimals())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.composer.submitting && self.submit_blocker().is_none()
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing, picker effects
mod app_messages;

// Command execution, input handling
mod app_commands;

// Backend calls, clipboard, navigation
mod app_actions;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
