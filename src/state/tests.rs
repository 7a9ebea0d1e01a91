//! Tests for the state module.
//!
//! These drive [`App`] through commands and messages against a [`MockWallet`].
//! Spawned tasks finish as soon as the test awaits, so [`drain`] applies every
//! result that is ready.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::timeout;

use super::{
    App, AppConfig, AppMessage, ComposerField, CreateProfileForm, OfferView, PickerPhase,
    PopupState, Screen,
};
use crate::commands::{AppCommand, InputContext};
use crate::domain::{CreateDid, Expiration, OfferDraft, Side, SyncStatus, Unit};
use crate::test_utils::{DidMother, MockWallet, OfferMother};

// ========================================================================
// Test Helper Functions
// ========================================================================

fn create_test_app(wallet: &MockWallet) -> App<MockWallet> {
    App::new(AppConfig::default(), wallet.clone())
}

/// Applies messages until none arrives for a short while.
async fn drain(app: &mut App<MockWallet>) {
    while let Ok(Some(message)) = timeout(Duration::from_millis(50), app.message_rx.recv()).await {
        app.handle_message(message);
    }
}

fn toast(app: &App<MockWallet>) -> Option<&str> {
    app.ui.toast.as_ref().map(|(message, _)| message.as_str())
}

fn type_text(app: &mut App<MockWallet>, text: &str) {
    for c in text.chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// A draft with one empty offered NFT slot and `taken` in a second slot.
fn draft_with_nft_slots(taken: Option<&str>) -> OfferDraft {
    let draft = OfferDraft::default();
    let mut offered = draft.offered.with_nft_added();
    if let Some(taken) = taken {
        offered = offered.with_nft_added().with_nft(1, taken);
    }
    draft.with_side(Side::Offered, offered)
}

// ========================================================================
// Navigation
// ========================================================================

#[tokio::test]
async fn test_pending_draft_redirects_to_composer() {
    let wallet = MockWallet::new().with_offers(OfferMother::records());
    let mut app = create_test_app(&wallet);

    app.drafts.set(OfferMother::simple_trade());
    app.navigate(Screen::Offers);
    assert_eq!(app.screen, Screen::MakeOffer);
    assert_eq!(wallet.count("get_offers"), 0);

    app.drafts.clear();
    app.navigate(Screen::Offers);
    drain(&mut app).await;
    assert_eq!(app.screen, Screen::Offers);
    assert_eq!(app.offers.records.len(), 3);
}

#[tokio::test]
async fn test_offers_failure_keeps_previous_list() {
    let wallet = MockWallet::new().failing("get_offers", "not synced");
    let mut app = create_test_app(&wallet);
    app.offers.set_records(OfferMother::records());

    app.execute_command(AppCommand::Refresh);
    drain(&mut app).await;

    assert_eq!(app.offers.records.len(), 3);
    assert!(app.ui.errors.is_empty());
}

#[tokio::test]
async fn test_keys_follow_input_context() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    assert_eq!(app.input_context(), InputContext::Offers);

    app.handle_key_event(key(KeyCode::Char('n'), KeyModifiers::NONE));
    assert_eq!(app.screen, Screen::MakeOffer);
    assert_eq!(app.input_context(), InputContext::Composer);

    // In the composer, plain letters are text, not commands.
    app.handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(!app.exit);

    app.handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.exit);
}

#[tokio::test]
async fn test_wallet_unit_replaces_fallback() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    assert_eq!(app.decimals(), 12);

    app.handle_message(AppMessage::SyncStatusLoaded(SyncStatus {
        balance: "0".to_string(),
        unit: Unit {
            ticker: "TXCH".to_string(),
            decimals: 6,
        },
        synced_coins: 1,
        total_coins: 1,
        receive_address: String::new(),
    }));
    assert_eq!(app.unit.ticker, "TXCH");
    assert_eq!(app.decimals(), 6);
}

// ========================================================================
// Composer
// ========================================================================

#[tokio::test]
async fn test_invalid_expiration_sends_nothing() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.drafts.set(OfferDraft {
        expiration: Some(Expiration {
            days: "a".to_string(),
            ..Expiration::default()
        }),
        ..OfferMother::simple_trade()
    });
    app.navigate(Screen::MakeOffer);

    assert!(!app.can_submit());
    app.execute_command(AppCommand::SubmitOffer);
    drain(&mut app).await;

    assert_eq!(wallet.count("make_offer"), 0);
    assert!(!app.composer.submitting);
    assert_eq!(app.ui.popup_state, PopupState::None);
}

#[tokio::test]
async fn test_negative_expiration_submits_like_the_gate_says() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.drafts.set(OfferDraft {
        expiration: Some(Expiration {
            days: "-1".to_string(),
            ..Expiration::default()
        }),
        ..OfferMother::simple_trade()
    });
    app.navigate(Screen::MakeOffer);

    assert_eq!(app.submit_blocker(), None);
    assert!(app.can_submit());
    app.execute_command(AppCommand::SubmitOffer);
    drain(&mut app).await;

    assert_eq!(wallet.count("make_offer"), 1);
    let expires = wallet.state().made_offers[0].expires_at_second;
    assert!(expires.is_some_and(|at| at < crate::state::composer::now_seconds()));
}

#[tokio::test]
async fn test_submit_is_ignored_while_in_flight() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.drafts.set(OfferMother::simple_trade());
    app.navigate(Screen::MakeOffer);

    app.execute_command(AppCommand::SubmitOffer);
    app.execute_command(AppCommand::SubmitOffer);
    drain(&mut app).await;

    assert_eq!(wallet.count("make_offer"), 1);
}

#[tokio::test]
async fn test_submit_opens_created_dialog() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.drafts.set(OfferMother::simple_trade());
    app.navigate(Screen::MakeOffer);

    app.handle_key_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert!(app.composer.submitting);
    assert!(!app.can_submit());
    drain(&mut app).await;

    assert!(!app.composer.submitting);
    assert_eq!(
        app.ui.popup_state,
        PopupState::OfferCreated("offer1created".to_string())
    );
    let request = wallet.state().made_offers[0].clone();
    assert_eq!(request.offered_assets.xch, "1500000000000");
    assert_eq!(request.requested_assets.cats[0].amount, "2500");
    assert_eq!(request.fee, "100000000");
    assert_eq!(request.expires_at_second, None);
}

#[tokio::test]
async fn test_save_clears_draft_and_lists_offers() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.drafts.set(OfferMother::simple_trade());
    app.navigate(Screen::MakeOffer);
    app.execute_command(AppCommand::SubmitOffer);
    drain(&mut app).await;

    app.execute_command(AppCommand::SaveOffer);
    drain(&mut app).await;

    assert_eq!(wallet.state().imported, vec!["offer1created".to_string()]);
    assert!(!app.drafts.has_pending());
    assert_eq!(app.screen, Screen::Offers);
    assert_eq!(app.ui.popup_state, PopupState::None);
    assert_eq!(toast(&app), Some("Offer saved"));
}

#[tokio::test]
async fn test_failed_save_keeps_draft() {
    let wallet = MockWallet::new().failing("import_offer", "Offer already imported");
    let mut app = create_test_app(&wallet);
    app.drafts.set(OfferMother::simple_trade());
    app.navigate(Screen::MakeOffer);
    app.execute_command(AppCommand::SubmitOffer);
    drain(&mut app).await;

    app.execute_command(AppCommand::SaveOffer);
    drain(&mut app).await;

    assert_eq!(app.drafts.get(), &OfferMother::simple_trade());
    assert_eq!(app.screen, Screen::MakeOffer);
    assert!(matches!(app.ui.popup_state, PopupState::OfferCreated(_)));
    assert_eq!(
        app.ui.current_error(),
        Some("Wallet error: Offer already imported")
    );
    assert_eq!(app.input_context(), InputContext::MessagePopup);

    // The error is acknowledged first; the dialog is still there after.
    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.input_context(), InputContext::OfferCreated);
}

#[tokio::test]
async fn test_failed_make_offer_reports_error() {
    let wallet = MockWallet::new().failing("make_offer", "Insufficient funds");
    let mut app = create_test_app(&wallet);
    app.drafts.set(OfferMother::simple_trade());
    app.navigate(Screen::MakeOffer);

    app.execute_command(AppCommand::SubmitOffer);
    drain(&mut app).await;

    assert!(!app.composer.submitting);
    assert_eq!(app.ui.popup_state, PopupState::None);
    assert_eq!(app.ui.current_error(), Some("Wallet error: Insufficient funds"));
    assert!(app.drafts.has_pending());
}

#[tokio::test]
async fn test_cancel_drops_draft() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.drafts.set(OfferMother::simple_trade());
    app.navigate(Screen::MakeOffer);

    app.execute_command(AppCommand::CancelOffer);
    assert!(!app.drafts.has_pending());
    assert_eq!(app.screen, Screen::Offers);
}

#[tokio::test]
async fn test_editing_fields() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.navigate(Screen::MakeOffer);

    app.execute_command(AppCommand::AddNative);
    assert_eq!(app.composer.focus, ComposerField::Native(Side::Offered));
    type_text(&mut app, "1x.5");
    assert_eq!(app.drafts.get().offered.native_amount.as_deref(), Some("1.5"));

    app.execute_command(AppCommand::Backspace);
    assert_eq!(app.drafts.get().offered.native_amount.as_deref(), Some("1."));

    app.execute_command(AppCommand::RemoveEntry);
    assert!(!app.drafts.get().offered.has_native());
    assert_eq!(app.composer.focus, ComposerField::SideHeader(Side::Offered));

    app.execute_command(AppCommand::ToggleExpiration);
    assert!(app.drafts.get().expiration.is_some());
}

#[tokio::test]
async fn test_paste_into_composer_field() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.navigate(Screen::MakeOffer);
    app.composer.focus = ComposerField::Fee;

    app.handle_paste(" 0.5abc\n");
    assert_eq!(app.drafts.get().fee, "0.5");
}

// ========================================================================
// Offer Viewer
// ========================================================================

#[tokio::test]
async fn test_blank_offer_input_never_navigates() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);

    app.execute_command(AppCommand::EnterOffer);
    type_text(&mut app, "   ");
    app.execute_command(AppCommand::SubmitForm);
    assert_eq!(app.screen, Screen::Offers);
    assert!(matches!(app.ui.popup_state, PopupState::OfferInput(_)));

    app.handle_paste("offer1abc");
    app.execute_command(AppCommand::SubmitForm);
    assert_eq!(app.ui.popup_state, PopupState::None);
    let Screen::ViewOffer(view) = &app.screen else {
        panic!("expected the offer view, got {:?}", app.screen);
    };
    assert_eq!(view.offer, "offer1abc");
}

#[tokio::test]
async fn test_paste_on_offer_list_opens_view() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);

    app.handle_paste("\n  ");
    assert_eq!(app.screen, Screen::Offers);

    app.handle_paste("offer1pasted\n");
    assert!(matches!(&app.screen, Screen::ViewOffer(view) if view.offer == "offer1pasted"));
}

#[tokio::test]
async fn test_import_from_view() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.view_offer("offer1abc");

    app.execute_command(AppCommand::ImportOffer);
    assert!(matches!(&app.screen, Screen::ViewOffer(view) if view.importing));
    drain(&mut app).await;

    assert_eq!(wallet.state().imported, vec!["offer1abc".to_string()]);
    assert_eq!(app.screen, Screen::Offers);
    assert_eq!(toast(&app), Some("Offer imported"));
}

#[tokio::test]
async fn test_failed_import_stays_on_view() {
    let wallet = MockWallet::new().failing("import_offer", "Invalid offer");
    let mut app = create_test_app(&wallet);
    app.view_offer("offer1bad");

    app.execute_command(AppCommand::ImportOffer);
    drain(&mut app).await;

    let expected = OfferView::open("offer1bad").unwrap();
    assert_eq!(app.screen, Screen::ViewOffer(expected));
    assert_eq!(app.ui.current_error(), Some("Wallet error: Invalid offer"));
}

// ========================================================================
// NFT Picker
// ========================================================================

#[tokio::test]
async fn test_picker_loads_page_and_thumbnails() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.nft_status.visible_nfts = 45;
    app.drafts.set(draft_with_nft_slots(None));
    app.navigate(Screen::MakeOffer);
    app.composer.focus = ComposerField::Nft(Side::Offered, 0);

    app.execute_command(AppCommand::Select);
    assert_eq!(app.input_context(), InputContext::NftPicker);
    drain(&mut app).await;

    let picker = app.ui.popup_state.as_picker().unwrap();
    assert_eq!(picker.page_count, 3);
    assert_eq!(picker.catalog.len(), 3);
    assert_eq!(picker.phase, PickerPhase::Ready);
    assert_eq!(app.thumbnails.cached_count(), 3);
    assert_eq!(wallet.count("get_nft_data"), 3);
}

#[tokio::test]
async fn test_picker_choose_and_page() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.nft_status.visible_nfts = 45;
    app.drafts.set(draft_with_nft_slots(None));
    app.navigate(Screen::MakeOffer);
    app.composer.focus = ComposerField::Nft(Side::Offered, 0);
    app.execute_command(AppCommand::Select);
    drain(&mut app).await;

    app.execute_command(AppCommand::MoveDown);
    app.execute_command(AppCommand::Select);
    assert_eq!(app.drafts.get().offered.nfts, vec!["nft1p0i1".to_string()]);
    drain(&mut app).await;

    let picker = app.ui.popup_state.as_picker().unwrap();
    assert_eq!(picker.nft_id, "nft1p0i1");
    assert_eq!(
        picker.selected.as_ref().map(|nft| nft.launcher_id.as_str()),
        Some("nft1p0i1")
    );

    app.execute_command(AppCommand::NextPage);
    drain(&mut app).await;
    let picker = app.ui.popup_state.as_picker().unwrap();
    assert_eq!(picker.page, 1);
    assert_eq!(picker.catalog[0].launcher_id, "nft1p1i0");
    assert_eq!(wallet.state().nft_queries[1].offset, 20);

    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.input_context(), InputContext::Composer);
}

#[tokio::test]
async fn test_picker_refuses_nft_used_elsewhere() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.drafts.set(draft_with_nft_slots(Some("nft1p0i0")));
    app.navigate(Screen::MakeOffer);
    app.open_picker(Side::Offered, 0);
    drain(&mut app).await;

    app.execute_command(AppCommand::Select);
    assert_eq!(app.drafts.get().offered.nfts[0], "");
    assert_eq!(toast(&app), Some("That NFT is already used in this offer"));
}

// ========================================================================
// Profiles
// ========================================================================

#[tokio::test]
async fn test_poller_runs_only_on_profiles() {
    let wallet = MockWallet::new().with_dids(vec![DidMother::named("did:chia:1a", "Alice")]);
    let mut app = create_test_app(&wallet);

    app.execute_command(AppCommand::ShowProfiles);
    assert!(app.profile_poller.is_some());
    drain(&mut app).await;
    assert!(app.profiles.loaded);
    assert_eq!(app.profiles.dids.len(), 1);

    app.execute_command(AppCommand::ShowOffers);
    assert!(app.profile_poller.is_none());
}

#[tokio::test]
async fn test_repeated_did_failure_queues_once() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);

    app.handle_message(AppMessage::DidsFailed("Wallet error: not synced".to_string()));
    app.handle_message(AppMessage::DidsFailed("Wallet error: not synced".to_string()));
    assert_eq!(app.ui.errors.len(), 1);
}

#[tokio::test]
async fn test_rename_requires_name() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.screen = Screen::Profiles;
    app.profiles
        .set_dids(vec![DidMother::named("did:chia:1a", "Alice")]);

    app.execute_command(AppCommand::RenameProfile);
    type_text(&mut app, "  ");
    app.execute_command(AppCommand::SubmitForm);
    assert!(matches!(app.ui.popup_state, PopupState::Rename(_)));
    assert_eq!(toast(&app), Some("Name is required"));

    type_text(&mut app, "Bob");
    app.execute_command(AppCommand::SubmitForm);
    assert_eq!(app.ui.popup_state, PopupState::None);
    drain(&mut app).await;

    let update = wallet.state().did_updates[0].clone();
    assert_eq!(update.name.as_deref(), Some("Bob"));
    assert!(update.visible);
    // A successful update refreshes the list.
    assert_eq!(wallet.count("get_dids"), 1);
}

#[tokio::test]
async fn test_toggle_visibility_keeps_name() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.screen = Screen::Profiles;
    app.profiles
        .set_dids(vec![DidMother::named("did:chia:1a", "Alice")]);

    app.execute_command(AppCommand::ToggleVisibility);
    drain(&mut app).await;

    let update = wallet.state().did_updates[0].clone();
    assert_eq!(update.name.as_deref(), Some("Alice"));
    assert!(!update.visible);
}

#[tokio::test]
async fn test_create_profile_flow() {
    let wallet = MockWallet::new();
    let mut app = create_test_app(&wallet);
    app.screen = Screen::CreateProfile(CreateProfileForm::default());

    app.execute_command(AppCommand::SubmitForm);
    assert_eq!(toast(&app), Some("Name is required"));
    assert_eq!(wallet.count("create_did"), 0);

    type_text(&mut app, "Alice");
    app.execute_command(AppCommand::NextField);
    type_text(&mut app, "0.5");
    app.execute_command(AppCommand::SubmitForm);
    drain(&mut app).await;

    assert_eq!(
        wallet.state().did_creates,
        vec![CreateDid {
            name: "Alice".to_string(),
            fee: "500000000000".to_string(),
        }]
    );
    assert_eq!(app.input_context(), InputContext::ProfileCreated);

    app.execute_command(AppCommand::Select);
    assert_eq!(app.screen, Screen::Profiles);
    assert_eq!(app.ui.popup_state, PopupState::None);
}

#[tokio::test]
async fn test_failed_create_keeps_form() {
    let wallet = MockWallet::new().failing("create_did", "Insufficient funds");
    let mut app = create_test_app(&wallet);
    app.screen = Screen::CreateProfile(CreateProfileForm::default());

    type_text(&mut app, "Alice");
    app.execute_command(AppCommand::SubmitForm);
    drain(&mut app).await;

    let Screen::CreateProfile(form) = &app.screen else {
        panic!("expected the create form, got {:?}", app.screen);
    };
    assert_eq!(form.name, "Alice");
    assert!(!form.submitting);
    assert_eq!(app.ui.current_error(), Some("Wallet error: Insufficient funds"));
}
