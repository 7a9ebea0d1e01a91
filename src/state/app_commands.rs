//! Command execution and input handling for the offerdesk application.
//!
//! Key events are mapped to commands by [`KeyMapper`] in the current
//! [`InputContext`], then executed here against the application state.

use crossterm::event::KeyEvent;

use super::app_actions::EntryKind;
use super::{App, PopupState, Screen};
use crate::client::WalletApi;
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl<W: WalletApi> App<W> {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context.
    ///
    /// A queued error takes precedence over any popup; a popup takes
    /// precedence over the screen.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.ui.current_error().is_some() {
            return InputContext::MessagePopup;
        }

        match &self.ui.popup_state {
            PopupState::OfferCreated(_) => InputContext::OfferCreated,
            PopupState::OfferInput(_) | PopupState::Rename(_) => InputContext::TextInput,
            PopupState::NftPicker(_) => InputContext::NftPicker,
            PopupState::ProfileCreated(_) => InputContext::ProfileCreated,
            PopupState::None => match &self.screen {
                Screen::Offers => InputContext::Offers,
                Screen::MakeOffer => InputContext::Composer,
                Screen::ViewOffer(_) => InputContext::OfferView,
                Screen::Profiles => InputContext::Profiles,
                Screen::CreateProfile(_) => InputContext::CreateProfile,
            },
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => match self.screen {
                Screen::Offers => self.load_offers(),
                Screen::Profiles => self.load_dids(),
                _ => {}
            },
            AppCommand::Dismiss => {
                self.handle_dismiss();
            }

            // === Screens ===
            AppCommand::ShowOffers => {
                self.navigate(Screen::Offers);
            }
            AppCommand::ShowProfiles => {
                self.navigate(Screen::Profiles);
            }

            // === Lists ===
            AppCommand::MoveUp => self.move_cursor(false),
            AppCommand::MoveDown => self.move_cursor(true),
            AppCommand::Select => {
                self.handle_select();
            }

            // === Offers ===
            AppCommand::NewOffer => {
                self.navigate(Screen::MakeOffer);
            }
            AppCommand::EnterOffer => {
                self.ui.open_popup(PopupState::OfferInput(String::new()));
            }
            AppCommand::PasteOffer => {
                self.paste_offer();
            }
            AppCommand::CopyOffer => {
                self.copy_current_offer();
            }
            AppCommand::ImportOffer => {
                self.import_viewed_offer();
            }
            AppCommand::SaveOffer => {
                self.save_created_offer();
            }

            // === Text Fields ===
            AppCommand::NextField => match &mut self.screen {
                Screen::CreateProfile(form) => form.field = form.field.toggle(),
                Screen::MakeOffer => self.composer.focus_next(self.drafts.get()),
                _ => {}
            },
            AppCommand::PrevField => {
                if matches!(self.screen, Screen::MakeOffer) {
                    self.composer.focus_prev(self.drafts.get());
                }
            }
            AppCommand::TypeChar(c) => {
                self.type_char(c);
            }
            AppCommand::Backspace => {
                self.backspace();
            }
            AppCommand::SubmitForm => {
                self.handle_submit_form();
            }

            // === Composer ===
            AppCommand::AddNft => self.add_entry(EntryKind::Nft),
            AppCommand::AddToken => self.add_entry(EntryKind::Token),
            AppCommand::AddNative => self.add_entry(EntryKind::Native),
            AppCommand::RemoveEntry => self.remove_focused_entry(),
            AppCommand::ToggleExpiration => self.toggle_expiration(),
            AppCommand::SubmitOffer => self.submit_offer(),
            AppCommand::CancelOffer => self.cancel_offer(),

            // === NFT Picker ===
            AppCommand::PrevPage => self.change_picker_page(false),
            AppCommand::NextPage => self.change_picker_page(true),

            // === Profiles ===
            AppCommand::NewProfile => {
                self.navigate(Screen::CreateProfile(super::CreateProfileForm::default()));
            }
            AppCommand::RenameProfile => {
                self.open_rename();
            }
            AppCommand::ToggleVisibility => {
                self.toggle_selected_visibility();
            }
            AppCommand::ToggleHidden => {
                self.profiles.toggle_show_hidden();
            }

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Command Helpers
    // ========================================================================

    fn handle_dismiss(&mut self) {
        if self.ui.current_error().is_some() {
            self.ui.dismiss_error();
            return;
        }
        if self.ui.has_active_popup() {
            // Dismissing the created dialog keeps the draft.
            self.ui.dismiss_popup();
            return;
        }
        match self.screen {
            Screen::ViewOffer(_) => self.navigate(Screen::Offers),
            Screen::CreateProfile(_) => self.navigate(Screen::Profiles),
            _ => {}
        }
    }

    fn move_cursor(&mut self, down: bool) {
        if let Some(picker) = self.ui.popup_state.as_picker_mut() {
            if down {
                picker.cursor_down();
            } else {
                picker.cursor_up();
            }
            return;
        }
        match (&self.screen, down) {
            (Screen::Offers, true) => self.offers.cursor_down(),
            (Screen::Offers, false) => self.offers.cursor_up(),
            (Screen::Profiles, true) => self.profiles.cursor_down(),
            (Screen::Profiles, false) => self.profiles.cursor_up(),
            _ => {}
        }
    }

    fn handle_select(&mut self) {
        match &self.ui.popup_state {
            PopupState::NftPicker(_) => {
                self.choose_nft();
                return;
            }
            PopupState::ProfileCreated(_) => {
                self.ui.dismiss_popup();
                self.navigate(Screen::Profiles);
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Offers => {
                if let Some(offer) = self.offers.selected().map(|record| record.offer.clone()) {
                    self.view_offer(&offer);
                }
            }
            Screen::MakeOffer => {
                let focus = self.composer.focus;
                match focus {
                    super::ComposerField::Nft(side, slot) if focus.uses_picker() => {
                        self.open_picker(side, slot);
                    }
                    _ => self.composer.focus_next(self.drafts.get()),
                }
            }
            _ => {}
        }
    }

    fn handle_submit_form(&mut self) {
        match &self.ui.popup_state {
            PopupState::OfferInput(text) => {
                let text = text.clone();
                self.view_offer(&text);
            }
            PopupState::Rename(_) => self.submit_rename(),
            PopupState::None => self.submit_create_profile(),
            _ => {}
        }
    }

    fn type_char(&mut self, c: char) {
        if let Some(buffer) = self.ui.popup_state.text_input_mut() {
            buffer.push(c);
            return;
        }
        match &mut self.screen {
            Screen::CreateProfile(form) => form.push_char(c),
            Screen::MakeOffer => self.type_into_composer(c),
            _ => {}
        }
    }

    fn backspace(&mut self) {
        if let Some(buffer) = self.ui.popup_state.text_input_mut() {
            buffer.pop();
            return;
        }
        match &mut self.screen {
            Screen::CreateProfile(form) => form.backspace(),
            Screen::MakeOffer => self.backspace_in_composer(),
            _ => {}
        }
    }

    /// Copies the offer in focus: the created dialog's, the viewed one, or the
    /// highlighted record.
    fn copy_current_offer(&mut self) {
        let offer = match (&self.ui.popup_state, &self.screen) {
            (PopupState::OfferCreated(offer), _) => Some(offer.clone()),
            (PopupState::None, Screen::ViewOffer(view)) => Some(view.offer.clone()),
            (PopupState::None, Screen::Offers) => {
                self.offers.selected().map(|record| record.offer.clone())
            }
            _ => None,
        };
        if let Some(offer) = offer {
            self.copy_offer(&offer);
        }
    }

    /// Pastes into the entry dialog, or views the clipboard offer from the list.
    fn paste_offer(&mut self) {
        let Some(text) = self.read_clipboard() else {
            return;
        };
        if let PopupState::OfferInput(buffer) = &mut self.ui.popup_state {
            buffer.push_str(text.trim());
        } else if matches!(self.screen, Screen::Offers) {
            self.view_offer(&text);
        }
    }
}
