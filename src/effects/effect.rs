//! Effect vocabulary and applied-effect records.
//!
//! Effects are closed tagged variants; magnitudes live inside the
//! variant that needs them. Applying an effect always yields an
//! `AppliedRecord` - for engine-local state it describes the mutation,
//! for externally-owned state it carries a typed `ResolutionRequest`
//! the owning collaborator consumes after the dispatch.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, InstanceId};
use crate::core::PlayLane;

/// An atomic card effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Temporary run bonus, scoped to the current play resolution.
    RunBonus { amount: i32 },

    /// Temporary short-pass bonus, scoped to the current play.
    ShortPassBonus { amount: i32 },

    /// Temporary deep-pass bonus, scoped to the current play.
    DeepPassBonus { amount: i32 },

    /// Request a fumble check. The outcome is decided externally.
    ForceFumble,

    /// Restore stamina, clamped to the definition maximum.
    HealStamina { amount: i32 },

    /// Ask play resolution to negate the opposing top receiver.
    NegateTopReceiver,

    /// Ask the deck manager to draw cards.
    Draw { count: u32 },

    /// Ask the hand manager to discard cards. The source card leaves
    /// play once the dispatch cycle completes.
    Discard { count: u32 },

    /// Data-defined effect key. Applies as a diagnostic no-op.
    Custom(String),
}

impl Effect {
    /// The play lane a bonus effect feeds, if any.
    #[must_use]
    pub fn bonus_lane(&self) -> Option<PlayLane> {
        match self {
            Effect::RunBonus { .. } => Some(PlayLane::Run),
            Effect::ShortPassBonus { .. } => Some(PlayLane::ShortPass),
            Effect::DeepPassBonus { .. } => Some(PlayLane::DeepPass),
            _ => None,
        }
    }
}

/// A typed request for the collaborator that owns the affected state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionRequest {
    /// Play-scoped additive bonus, consumed by play resolution.
    PlayBonus { lane: PlayLane, amount: i32 },

    /// Fumble check, consumed by the fumble resolver.
    Fumble { source: InstanceId },

    /// Negate the opposing top receiver for this play.
    NegateTopReceiver { source: InstanceId },

    /// Draw `count` cards, consumed by the deck manager.
    Draw { count: u32 },

    /// Discard `count` cards, consumed by the hand manager.
    Discard { count: u32 },
}

/// What applying one effect did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    /// Engine-local stamina change (already applied).
    Stamina { before: i32, after: i32 },

    /// A request for an external collaborator.
    Requested(ResolutionRequest),

    /// Nothing happened (unknown or inert payload).
    Ignored,
}

/// The record emitted for every rule whose condition held.
///
/// Records are the engine's only outbound surface: log sinks render
/// them, collaborators consume their requests, and tests compare them
/// byte for byte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRecord {
    /// Instance whose rule fired.
    pub source: InstanceId,

    /// Definition behind the instance.
    pub card: CardId,

    /// The effect as authored.
    pub effect: Effect,

    /// False for diagnostic no-ops.
    pub applied: bool,

    /// What actually happened.
    pub outcome: EffectOutcome,
}

impl AppliedRecord {
    /// The collaborator request carried by this record, if any.
    #[must_use]
    pub fn request(&self) -> Option<&ResolutionRequest> {
        match &self.outcome {
            EffectOutcome::Requested(request) => Some(request),
            _ => None,
        }
    }

    /// Whether this record takes its source out of play.
    #[must_use]
    pub fn leaves_play(&self) -> bool {
        matches!(
            self.outcome,
            EffectOutcome::Requested(ResolutionRequest::Discard { .. })
        )
    }
}

/// Encode a record sequence into a stable byte log.
///
/// The encoding is deterministic for a given sequence, which makes it
/// usable both as a sink format and as the byte-level equality check
/// for dispatch determinism.
pub fn encode_records(records: &[AppliedRecord]) -> bincode::Result<Vec<u8>> {
    bincode::serialize(records)
}
