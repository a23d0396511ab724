//! Collaborator-side consumers for externally-resolved effect records.
//!
//! The applicator emits requests; these helpers are the other half of
//! that contract, consumed by play resolution, the fumble check, and
//! the deck/hand manager once a dispatch returns.

pub mod fumble;
pub mod hand;
pub mod play;

pub use fumble::{FumbleOutcome, FumbleResolver};
pub use hand::DeckRequests;
pub use play::PlayModifiers;
