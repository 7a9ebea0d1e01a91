//! Offer composer: field focus, editing, validation, and request building.
//!
//! All functions here are pure over an [`OfferDraft`]; the app owns the draft
//! and swaps in whatever these return.

use thiserror::Error;

use crate::domain::{
    AmountError, AssetSet, Assets, CatAmount, Expiration, MakeOffer, OfferDraft, Side,
    TOKEN_DECIMALS, to_base_units_or_zero,
};

// ============================================================================
// Errors
// ============================================================================

/// Reasons the composer refuses to submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    #[error("Expiration {field} must be a number")]
    InvalidExpiration { field: &'static str },

    #[error("Expiration is out of range")]
    ExpirationOutOfRange,

    #[error("NFT {0} is used more than once")]
    DuplicateNft(String),

    #[error("{label}: {source}")]
    Amount { label: String, source: AmountError },
}

impl ComposerError {
    fn amount(label: impl Into<String>) -> impl FnOnce(AmountError) -> Self {
        let label = label.into();
        move |source| Self::Amount { label, source }
    }
}

// ============================================================================
// Expiration
// ============================================================================

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Parses one timer field. Blank is zero; anything else must be a finite number.
#[must_use]
pub fn parse_timer_field(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.0);
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Seconds the timer adds to the submit time. Negative values are allowed.
///
/// # Errors
///
/// Fails if a field is not a number or the fields add up to a non-finite
/// offset. The result never depends on the submit time.
pub fn expiration_offset(expiration: &Expiration) -> Result<f64, ComposerError> {
    let field = |value: &str, name: &'static str| {
        parse_timer_field(value).ok_or(ComposerError::InvalidExpiration { field: name })
    };
    let days = field(&expiration.days, "days")?;
    let hours = field(&expiration.hours, "hours")?;
    let minutes = field(&expiration.minutes, "minutes")?;

    let offset = days * SECONDS_PER_DAY + hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE;
    if offset.is_finite() {
        Ok(offset)
    } else {
        Err(ComposerError::ExpirationOutOfRange)
    }
}

/// Absolute expiry in unix seconds, or `None` for an offer that never expires.
///
/// The sum is rounded and clamped to the `u64` range, so only
/// [`expiration_offset`] can fail.
///
/// # Errors
///
/// Fails if the timer fields are rejected by [`expiration_offset`].
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn expires_at_second(
    expiration: Option<&Expiration>,
    now: u64,
) -> Result<Option<u64>, ComposerError> {
    let Some(expiration) = expiration else {
        return Ok(None);
    };
    let offset = expiration_offset(expiration)?;

    // Float to int casts saturate: below zero is 0, past the range is u64::MAX.
    Ok(Some(((now as f64) + offset).round() as u64))
}

/// Current unix time in whole seconds, rounded up.
#[must_use]
pub fn now_seconds() -> u64 {
    let millis = chrono::Utc::now().timestamp_millis();
    u64::try_from(millis).map_or(0, |millis| millis.div_ceil(1000))
}

// ============================================================================
// Request Building
// ============================================================================

fn side_assets(assets: &AssetSet, side: Side, decimals: u8) -> Result<Assets, ComposerError> {
    let native = to_base_units_or_zero(assets.native_amount.as_deref(), decimals)
        .map_err(ComposerError::amount(format!("{} amount", side.label())))?;

    let cats = assets
        .tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let amount = to_base_units_or_zero(Some(&token.amount), TOKEN_DECIMALS).map_err(
                ComposerError::amount(format!("{} token {}", side.label(), i + 1)),
            )?;
            Ok(CatAmount {
                asset_id: token.asset_id.trim().to_string(),
                amount: amount.to_string(),
            })
        })
        .collect::<Result<Vec<_>, ComposerError>>()?;

    let nfts = assets
        .nfts
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Assets {
        xch: native.to_string(),
        cats,
        nfts,
    })
}

/// Converts the draft into a `make_offer` request.
///
/// Native amounts and the fee use the wallet's `decimals`; token amounts use
/// [`TOKEN_DECIMALS`]. Blank or disabled amounts become `"0"`. Unfilled NFT
/// placeholders are left out.
///
/// # Errors
///
/// Fails on an invalid expiration, a repeated NFT, or an amount that does not
/// convert.
pub fn build_request(
    draft: &OfferDraft,
    decimals: u8,
    now: u64,
) -> Result<MakeOffer, ComposerError> {
    if let Some(nft_id) = draft.duplicate_nft() {
        return Err(ComposerError::DuplicateNft(nft_id.to_string()));
    }
    let expires_at_second = expires_at_second(draft.expiration.as_ref(), now)?;
    let fee = to_base_units_or_zero(Some(&draft.fee), decimals)
        .map_err(ComposerError::amount("Network fee"))?;

    Ok(MakeOffer {
        offered_assets: side_assets(&draft.offered, Side::Offered, decimals)?,
        requested_assets: side_assets(&draft.requested, Side::Requested, decimals)?,
        fee: fee.to_string(),
        expires_at_second,
    })
}

/// Why submission is disabled, or `None` when the draft can be submitted.
///
/// No check in [`build_request`] depends on `now`, so the answer holds for
/// whatever time the request is built at.
#[must_use]
pub fn submit_blocker(draft: &OfferDraft, decimals: u8) -> Option<ComposerError> {
    build_request(draft, decimals, 0).err()
}

// ============================================================================
// Fields
// ============================================================================

/// A focusable row in the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposerField {
    /// Heading of one side; the target for add commands on an empty side.
    SideHeader(Side),
    Native(Side),
    Nft(Side, usize),
    TokenAssetId(Side, usize),
    TokenAmount(Side, usize),
    Fee,
    ExpirationDays,
    ExpirationHours,
    ExpirationMinutes,
}

impl ComposerField {
    /// Side the field belongs to. Shared fields count as the offered side.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::SideHeader(side)
            | Self::Native(side)
            | Self::Nft(side, _)
            | Self::TokenAssetId(side, _)
            | Self::TokenAmount(side, _) => side,
            Self::Fee | Self::ExpirationDays | Self::ExpirationHours | Self::ExpirationMinutes => {
                Side::Offered
            }
        }
    }

    /// Offered NFT slots are filled through the picker, not typed.
    #[must_use]
    pub const fn uses_picker(self) -> bool {
        matches!(self, Self::Nft(Side::Offered, _))
    }

    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::SideHeader(_)) && !self.uses_picker()
    }

    /// Amount fields only take digits and a decimal point.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Native(_) | Self::TokenAmount(..) | Self::Fee => c.is_ascii_digit() || c == '.',
            _ => self.is_text() && !c.is_control(),
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::SideHeader(side) => side.label().to_string(),
            Self::Native(_) => "Amount".to_string(),
            Self::Nft(_, i) => format!("NFT {}", i + 1),
            Self::TokenAssetId(_, i) => format!("Token {} asset id", i + 1),
            Self::TokenAmount(_, i) => format!("Token {} amount", i + 1),
            Self::Fee => "Network Fee".to_string(),
            Self::ExpirationDays => "Days".to_string(),
            Self::ExpirationHours => "Hours".to_string(),
            Self::ExpirationMinutes => "Minutes".to_string(),
        }
    }
}

fn side_fields(assets: &AssetSet, side: Side, fields: &mut Vec<ComposerField>) {
    fields.push(ComposerField::SideHeader(side));
    if assets.has_native() {
        fields.push(ComposerField::Native(side));
    }
    fields.extend((0..assets.nfts.len()).map(|i| ComposerField::Nft(side, i)));
    for i in 0..assets.tokens.len() {
        fields.push(ComposerField::TokenAssetId(side, i));
        fields.push(ComposerField::TokenAmount(side, i));
    }
}

/// Focus order of the composer for `draft`.
#[must_use]
pub fn fields(draft: &OfferDraft) -> Vec<ComposerField> {
    let mut fields = Vec::new();
    side_fields(&draft.offered, Side::Offered, &mut fields);
    side_fields(&draft.requested, Side::Requested, &mut fields);
    fields.push(ComposerField::Fee);
    if draft.expiration.is_some() {
        fields.extend([
            ComposerField::ExpirationDays,
            ComposerField::ExpirationHours,
            ComposerField::ExpirationMinutes,
        ]);
    }
    fields
}

/// Current text of `field`, if it is present in the draft.
#[must_use]
pub fn field_value(draft: &OfferDraft, field: ComposerField) -> Option<&str> {
    let expiration = draft.expiration.as_ref();
    match field {
        ComposerField::SideHeader(_) => None,
        ComposerField::Native(side) => draft.side(side).native_amount.as_deref(),
        ComposerField::Nft(side, i) => draft.side(side).nfts.get(i).map(String::as_str),
        ComposerField::TokenAssetId(side, i) => draft
            .side(side)
            .tokens
            .get(i)
            .map(|token| token.asset_id.as_str()),
        ComposerField::TokenAmount(side, i) => draft
            .side(side)
            .tokens
            .get(i)
            .map(|token| token.amount.as_str()),
        ComposerField::Fee => Some(&draft.fee),
        ComposerField::ExpirationDays => expiration.map(|e| e.days.as_str()),
        ComposerField::ExpirationHours => expiration.map(|e| e.hours.as_str()),
        ComposerField::ExpirationMinutes => expiration.map(|e| e.minutes.as_str()),
    }
}

/// Returns a draft with `field` set to `value`.
#[must_use]
pub fn with_field_value(draft: &OfferDraft, field: ComposerField, value: String) -> OfferDraft {
    match field {
        ComposerField::SideHeader(_) => draft.clone(),
        ComposerField::Native(side) => {
            draft.with_side(side, draft.side(side).with_native_amount(value))
        }
        ComposerField::Nft(side, i) => draft.with_side(side, draft.side(side).with_nft(i, value)),
        ComposerField::TokenAssetId(side, i) => {
            draft.with_side(side, draft.side(side).with_token_asset_id(i, value))
        }
        ComposerField::TokenAmount(side, i) => {
            draft.with_side(side, draft.side(side).with_token_amount(i, value))
        }
        ComposerField::Fee => OfferDraft {
            fee: value,
            ..draft.clone()
        },
        ComposerField::ExpirationDays => with_expiration(draft, |e| e.days = value),
        ComposerField::ExpirationHours => with_expiration(draft, |e| e.hours = value),
        ComposerField::ExpirationMinutes => with_expiration(draft, |e| e.minutes = value),
    }
}

fn with_expiration(draft: &OfferDraft, edit: impl FnOnce(&mut Expiration)) -> OfferDraft {
    let mut expiration = draft.expiration.clone();
    if let Some(expiration) = expiration.as_mut() {
        edit(expiration);
    }
    OfferDraft {
        expiration,
        ..draft.clone()
    }
}

/// Returns a draft with the entry behind `field` removed.
///
/// Removing the native amount disables the slot. Shared fields are not removable.
#[must_use]
pub fn without_field(draft: &OfferDraft, field: ComposerField) -> OfferDraft {
    match field {
        ComposerField::Native(side) => draft.with_side(side, draft.side(side).without_native()),
        ComposerField::Nft(side, i) => draft.with_side(side, draft.side(side).with_nft_removed(i)),
        ComposerField::TokenAssetId(side, i) | ComposerField::TokenAmount(side, i) => {
            draft.with_side(side, draft.side(side).with_token_removed(i))
        }
        _ => draft.clone(),
    }
}

/// Switches the expiration timer on (one day) or off.
#[must_use]
pub fn with_expiration_toggled(draft: &OfferDraft) -> OfferDraft {
    OfferDraft {
        expiration: match draft.expiration {
            Some(_) => None,
            None => Some(Expiration::default()),
        },
        ..draft.clone()
    }
}

// ============================================================================
// Composer State
// ============================================================================

/// View state of the composer screen. The draft itself lives in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    pub focus: ComposerField,
    /// A `make_offer` request is in flight.
    pub submitting: bool,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            focus: ComposerField::SideHeader(Side::Offered),
            submitting: false,
        }
    }
}

impl ComposerState {
    /// Keeps focus on a field that exists in `draft`.
    pub fn normalize(&mut self, draft: &OfferDraft) {
        let fields = fields(draft);
        if fields.contains(&self.focus) {
            return;
        }
        self.focus = match self.focus {
            ComposerField::Native(side)
            | ComposerField::Nft(side, _)
            | ComposerField::TokenAssetId(side, _)
            | ComposerField::TokenAmount(side, _) => ComposerField::SideHeader(side),
            _ => ComposerField::Fee,
        };
    }

    pub fn focus_next(&mut self, draft: &OfferDraft) {
        self.step(draft, true);
    }

    pub fn focus_prev(&mut self, draft: &OfferDraft) {
        self.step(draft, false);
    }

    fn step(&mut self, draft: &OfferDraft, forward: bool) {
        let fields = fields(draft);
        let len = fields.len();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        if let Some(field) = fields.get(next) {
            self.focus = *field;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
