//! Offer list shown on the Offers screen.

use crate::domain::OfferRecord;

#[derive(Debug, Clone, Default)]
pub struct OffersState {
    pub records: Vec<OfferRecord>,
    pub cursor: usize,
    /// Set once the first listing has arrived.
    pub loaded: bool,
}

impl OffersState {
    /// Replaces the list with a fresh listing.
    pub fn set_records(&mut self, records: Vec<OfferRecord>) {
        self.records = records;
        self.loaded = true;
        self.cursor = self.cursor.min(self.records.len().saturating_sub(1));
    }

    #[must_use]
    pub fn selected(&self) -> Option<&OfferRecord> {
        self.records.get(self.cursor)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.records.len() {
            self.cursor += 1;
        }
    }
}
