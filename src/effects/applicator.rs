//! Applying effects to card instances.
//!
//! The applicator owns the split between engine-local and external
//! state: stamina heals mutate the instance directly and synchronously;
//! everything else becomes a `ResolutionRequest` for the collaborator
//! that owns the state. It never reaches into state it does not own,
//! and it never fails - unknown payloads degrade to diagnostic records.

use crate::cards::CardInstance;
use crate::core::PlayLane;

use super::effect::{AppliedRecord, Effect, EffectOutcome, ResolutionRequest};

/// Applies one effect on behalf of the rule engine.
pub struct EffectApplicator;

impl EffectApplicator {
    /// Apply an effect to its source instance and describe what
    /// happened.
    pub fn apply(effect: &Effect, source: &mut CardInstance) -> AppliedRecord {
        let (applied, outcome) = match effect {
            Effect::RunBonus { amount } => play_bonus(PlayLane::Run, *amount),
            Effect::ShortPassBonus { amount } => play_bonus(PlayLane::ShortPass, *amount),
            Effect::DeepPassBonus { amount } => play_bonus(PlayLane::DeepPass, *amount),

            Effect::ForceFumble => (
                true,
                EffectOutcome::Requested(ResolutionRequest::Fumble { source: source.id }),
            ),

            Effect::HealStamina { amount } => {
                let before = source.stamina();
                let after = source.heal_stamina(*amount);
                (true, EffectOutcome::Stamina { before, after })
            }

            Effect::NegateTopReceiver => (
                true,
                EffectOutcome::Requested(ResolutionRequest::NegateTopReceiver {
                    source: source.id,
                }),
            ),

            Effect::Draw { count } => (
                true,
                EffectOutcome::Requested(ResolutionRequest::Draw { count: *count }),
            ),

            Effect::Discard { count } => (
                true,
                EffectOutcome::Requested(ResolutionRequest::Discard { count: *count }),
            ),

            Effect::Custom(key) => {
                tracing::warn!(key = %key, card = %source.card_id(), "unhandled custom effect");
                (false, EffectOutcome::Ignored)
            }
        };

        AppliedRecord {
            source: source.id,
            card: source.card_id(),
            effect: effect.clone(),
            applied,
            outcome,
        }
    }
}

fn play_bonus(lane: PlayLane, amount: i32) -> (bool, EffectOutcome) {
    (
        true,
        EffectOutcome::Requested(ResolutionRequest::PlayBonus { lane, amount }),
    )
}
