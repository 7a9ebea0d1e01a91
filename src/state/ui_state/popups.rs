//! Popup state types for the offerdesk TUI.
//!
//! Only one popup is open at a time. Errors are not popups in this sense: they
//! queue up in [`super::UiState`] and draw above whatever popup is open.

use crate::domain::TransactionResponse;
use crate::state::nft_picker::NftPicker;
use crate::state::profiles::RenameForm;

// ============================================================================
// Popup State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// A freshly created offer, ready to copy or save.
    OfferCreated(String),
    /// Manual offer entry with the text typed so far.
    OfferInput(String),
    /// Rename dialog for a profile.
    Rename(RenameForm),
    /// NFT picker for an offered NFT slot.
    NftPicker(Box<NftPicker>),
    /// Confirmation of a submitted `create_did`.
    ProfileCreated(Box<TransactionResponse>),
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub fn as_picker(&self) -> Option<&NftPicker> {
        match self {
            Self::NftPicker(picker) => Some(picker),
            _ => None,
        }
    }

    pub fn as_picker_mut(&mut self) -> Option<&mut NftPicker> {
        match self {
            Self::NftPicker(picker) => Some(picker),
            _ => None,
        }
    }

    /// Text buffer of popups that take typed input.
    pub fn text_input_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::OfferInput(text) => Some(text),
            Self::Rename(form) => Some(&mut form.name),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;
    use crate::test_utils::DidMother;

    #[test]
    fn test_popup_state_variants() {
        assert!(!PopupState::None.is_active());
        assert!(PopupState::OfferCreated("offer1abc".to_string()).is_active());
        assert!(PopupState::OfferInput(String::new()).is_active());

        let mut picker = PopupState::NftPicker(Box::new(NftPicker::new(Side::Offered, 0, "", 0)));
        assert!(picker.as_picker().is_some());
        assert!(picker.as_picker_mut().is_some());
        assert!(picker.text_input_mut().is_none());
    }

    #[test]
    fn test_text_input_targets() {
        let mut input = PopupState::OfferInput("off".to_string());
        input.text_input_mut().unwrap().push_str("er1");
        assert_eq!(input, PopupState::OfferInput("offer1".to_string()));

        let did = DidMother::named("did:chia:1a", "Alice");
        let mut rename = PopupState::Rename(RenameForm::for_did(&did));
        rename.text_input_mut().unwrap().push('B');
        let PopupState::Rename(form) = rename else {
            panic!("expected rename popup");
        };
        assert_eq!(form.name, "B");
    }
}
