//! DID profile list and the profile forms.

use crate::domain::did::{has_hidden, visible_dids};
use crate::domain::{AmountError, CreateDid, DidRecord, UpdateDid, to_base_units_or_zero};

// ============================================================================
// Profile List
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ProfilesState {
    pub dids: Vec<DidRecord>,
    pub show_hidden: bool,
    pub cursor: usize,
    /// Set once the first listing has arrived.
    pub loaded: bool,
}

impl ProfilesState {
    /// Replaces the list with a fresh listing.
    pub fn set_dids(&mut self, dids: Vec<DidRecord>) {
        self.dids = dids;
        self.loaded = true;
        self.clamp_cursor();
    }

    /// Profiles the list shows.
    #[must_use]
    pub fn visible(&self) -> Vec<&DidRecord> {
        visible_dids(&self.dids, self.show_hidden)
    }

    #[must_use]
    pub fn has_hidden(&self) -> bool {
        has_hidden(&self.dids)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&DidRecord> {
        self.visible().get(self.cursor).copied()
    }

    /// Toggles hidden profiles. Does nothing while no profile is hidden.
    pub fn toggle_show_hidden(&mut self) {
        if self.has_hidden() {
            self.show_hidden = !self.show_hidden;
            self.clamp_cursor();
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible().len() {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible().len().saturating_sub(1));
    }

    /// Empty-state notice, or `None` when there is something to show.
    #[must_use]
    pub fn empty_notice(&self) -> Option<String> {
        if !self.visible().is_empty() {
            return None;
        }
        let visible = if self.dids.is_empty() { "" } else { "visible " };
        Some(format!(
            "You do not currently have any {visible}DID profiles. Would you like to create one?"
        ))
    }
}

/// Request that flips the visibility of `did`, keeping its name.
#[must_use]
pub fn visibility_toggle(did: &DidRecord) -> UpdateDid {
    UpdateDid {
        did_id: did.launcher_id.clone(),
        name: did.name.clone(),
        visible: !did.visible,
    }
}

// ============================================================================
// Rename
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameForm {
    pub did_id: String,
    pub visible: bool,
    pub name: String,
}

impl RenameForm {
    #[must_use]
    pub fn for_did(did: &DidRecord) -> Self {
        Self {
            did_id: did.launcher_id.clone(),
            visible: did.visible,
            name: String::new(),
        }
    }

    /// The rename request, or `None` while the name is blank.
    #[must_use]
    pub fn request(&self) -> Option<UpdateDid> {
        let name = self.name.trim();
        (!name.is_empty()).then(|| UpdateDid {
            did_id: self.did_id.clone(),
            name: Some(name.to_string()),
            visible: self.visible,
        })
    }
}

// ============================================================================
// Create Profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateProfileField {
    #[default]
    Name,
    Fee,
}

impl CreateProfileField {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Name => Self::Fee,
            Self::Fee => Self::Name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileFormError {
    #[error("Name is required")]
    NameRequired,
    #[error("Network fee: {0}")]
    Fee(#[from] AmountError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateProfileForm {
    pub name: String,
    /// Optional fee in display units.
    pub fee: String,
    pub field: CreateProfileField,
    pub submitting: bool,
}

impl CreateProfileForm {
    pub fn push_char(&mut self, c: char) {
        match self.field {
            CreateProfileField::Name => self.name.push(c),
            CreateProfileField::Fee if c.is_ascii_digit() || c == '.' => self.fee.push(c),
            CreateProfileField::Fee => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            CreateProfileField::Name => self.name.pop(),
            CreateProfileField::Fee => self.fee.pop(),
        };
    }

    /// Builds `create_did`, converting the fee at `decimals`. A blank fee is zero.
    ///
    /// # Errors
    ///
    /// Fails if the name is blank or the fee is not a valid amount.
    pub fn request(&self, decimals: u8) -> Result<CreateDid, ProfileFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProfileFormError::NameRequired);
        }
        let fee = to_base_units_or_zero(Some(&self.fee), decimals)?;
        Ok(CreateDid {
            name: name.to_string(),
            fee: fee.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
