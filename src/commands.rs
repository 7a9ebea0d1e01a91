//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`] according to
//! the current [`InputContext`]; the app then executes the command. Keeping
//! the mapping pure makes every binding testable without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// The current input context for key mapping.
///
/// Popups take precedence over screens; a queued error takes precedence over
/// everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Offer list screen.
    Offers,
    /// Offer composer screen.
    Composer,
    /// Offer detail screen.
    OfferView,
    /// Profile list screen.
    Profiles,
    /// Create profile form.
    CreateProfile,
    /// Error or informational popup.
    MessagePopup,
    /// Dialog showing a freshly created offer.
    OfferCreated,
    /// Popup with a single text field (offer entry, rename).
    TextInput,
    /// NFT picker popup.
    NftPicker,
    /// Confirmation after creating a profile.
    ProfileCreated,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    /// Reload the current screen's data.
    Refresh,
    /// Close the current popup, error, or detail view.
    Dismiss,

    // === Screens ===
    ShowOffers,
    ShowProfiles,

    // === Lists ===
    MoveUp,
    MoveDown,
    /// Activate the highlighted item.
    Select,

    // === Offers ===
    NewOffer,
    /// Open the manual offer entry dialog.
    EnterOffer,
    /// View the offer currently on the clipboard.
    PasteOffer,
    CopyOffer,
    ImportOffer,
    /// Import the created offer and clear the draft.
    SaveOffer,

    // === Text Fields ===
    NextField,
    PrevField,
    TypeChar(char),
    Backspace,
    /// Submit a form or text dialog.
    SubmitForm,

    // === Composer ===
    AddNft,
    AddToken,
    AddNative,
    RemoveEntry,
    ToggleExpiration,
    SubmitOffer,
    /// Drop the draft and return to the offer list.
    CancelOffer,

    // === NFT Picker ===
    PrevPage,
    NextPage,

    // === Profiles ===
    NewProfile,
    RenameProfile,
    ToggleVisibility,
    ToggleHidden,

    // === No Operation ===
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// Ctrl+C quits from any context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Offers => Self::map_offers_keys(key),
            InputContext::Composer => Self::map_composer_keys(key),
            InputContext::OfferView => Self::map_offer_view_keys(key),
            InputContext::Profiles => Self::map_profiles_keys(key),
            InputContext::CreateProfile => Self::map_create_profile_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
            InputContext::OfferCreated => Self::map_offer_created_keys(key),
            InputContext::TextInput => Self::map_text_input_keys(key),
            InputContext::NftPicker => Self::map_nft_picker_keys(key),
            InputContext::ProfileCreated => Self::map_profile_created_keys(key),
        }
    }

    fn map_offers_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('n') => AppCommand::NewOffer,
            KeyCode::Char('v') => AppCommand::EnterOffer,
            KeyCode::Char('p') => AppCommand::PasteOffer,
            KeyCode::Char('c') => AppCommand::CopyOffer,
            KeyCode::Char('2') | KeyCode::Tab | KeyCode::F(2) => AppCommand::ShowProfiles,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::Select,
            _ => AppCommand::Noop,
        }
    }

    /// Composer actions live on Ctrl so that plain keys stay typeable.
    fn map_composer_keys(key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n') => AppCommand::AddNft,
                KeyCode::Char('t') => AppCommand::AddToken,
                KeyCode::Char('x') => AppCommand::AddNative,
                KeyCode::Char('d') => AppCommand::RemoveEntry,
                KeyCode::Char('e') => AppCommand::ToggleExpiration,
                KeyCode::Char('s') => AppCommand::SubmitOffer,
                _ => AppCommand::Noop,
            };
        }

        match key.code {
            KeyCode::Esc => AppCommand::CancelOffer,
            KeyCode::F(1) => AppCommand::ShowOffers,
            KeyCode::F(2) => AppCommand::ShowProfiles,
            KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => AppCommand::PrevField,
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_offer_view_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter | KeyCode::Char('i') => AppCommand::ImportOffer,
            KeyCode::Char('c') => AppCommand::CopyOffer,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_profiles_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('n') => AppCommand::NewProfile,
            KeyCode::Char('e') => AppCommand::RenameProfile,
            KeyCode::Char('x') => AppCommand::ToggleVisibility,
            KeyCode::Char('h') => AppCommand::ToggleHidden,
            KeyCode::Char('1') | KeyCode::Tab | KeyCode::Esc | KeyCode::F(1) => {
                AppCommand::ShowOffers
            }
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            _ => AppCommand::Noop,
        }
    }

    fn map_create_profile_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => AppCommand::NextField,
            KeyCode::Enter => AppCommand::SubmitForm,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_offer_created_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter | KeyCode::Char('s') => AppCommand::SaveOffer,
            KeyCode::Char('c') => AppCommand::CopyOffer,
            _ => AppCommand::Noop,
        }
    }

    fn map_text_input_keys(key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('v') => AppCommand::PasteOffer,
                _ => AppCommand::Noop,
            };
        }

        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitForm,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_nft_picker_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => AppCommand::Dismiss,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Left | KeyCode::Char('h') => AppCommand::PrevPage,
            KeyCode::Right | KeyCode::Char('l') => AppCommand::NextPage,
            KeyCode::Enter => AppCommand::Select,
            _ => AppCommand::Noop,
        }
    }

    fn map_profile_created_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
