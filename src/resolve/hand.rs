//! Deck and hand request tallies.

use crate::effects::{AppliedRecord, ResolutionRequest};

/// Draw/discard totals owed to the deck and hand collaborators after a
/// dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeckRequests {
    /// Cards to draw.
    pub draw: u32,
    /// Cards to discard.
    pub discard: u32,
}

impl DeckRequests {
    /// Tally the deck/hand requests out of a record sequence.
    #[must_use]
    pub fn from_records(records: &[AppliedRecord]) -> Self {
        let mut requests = Self::default();
        for record in records {
            match record.request() {
                Some(ResolutionRequest::Draw { count }) => requests.draw += count,
                Some(ResolutionRequest::Discard { count }) => requests.discard += count,
                _ => {}
            }
        }
        requests
    }

    /// Check if nothing is owed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw == 0 && self.discard == 0
    }
}
