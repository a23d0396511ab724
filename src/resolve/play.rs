//! Play-scoped modifier accumulation.
//!
//! Bonus and negation effects never mutate shared state directly; they
//! surface as requests in the dispatch records. `PlayModifiers` is the
//! play-resolution side of that contract: it folds the requests of one
//! dispatch into per-lane modifiers that live exactly as long as the
//! current play.

use crate::cards::BaseStats;
use crate::core::PlayLane;
use crate::effects::{AppliedRecord, ResolutionRequest};

/// Temporary additive modifiers for one play resolution.
///
/// Build a fresh value per play and drop it when the play ends; nothing
/// here persists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayModifiers {
    run: i32,
    short_pass: i32,
    deep_pass: i32,
    negate_top_receiver: bool,
}

impl PlayModifiers {
    /// No modifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the play-relevant requests out of a record sequence.
    #[must_use]
    pub fn from_records(records: &[AppliedRecord]) -> Self {
        let mut modifiers = Self::default();
        for record in records {
            modifiers.absorb(record);
        }
        modifiers
    }

    /// Absorb a single record. Requests owned by other collaborators
    /// are ignored.
    pub fn absorb(&mut self, record: &AppliedRecord) {
        match record.request() {
            Some(ResolutionRequest::PlayBonus { lane, amount }) => match lane {
                PlayLane::Run => self.run += amount,
                PlayLane::ShortPass => self.short_pass += amount,
                PlayLane::DeepPass => self.deep_pass += amount,
            },
            Some(ResolutionRequest::NegateTopReceiver { .. }) => {
                self.negate_top_receiver = true;
            }
            _ => {}
        }
    }

    /// The accumulated modifier for a lane.
    #[must_use]
    pub fn bonus(&self, lane: PlayLane) -> i32 {
        match lane {
            PlayLane::Run => self.run,
            PlayLane::ShortPass => self.short_pass,
            PlayLane::DeepPass => self.deep_pass,
        }
    }

    /// Whether the opposing top receiver is negated for this play.
    #[must_use]
    pub fn top_receiver_negated(&self) -> bool {
        self.negate_top_receiver
    }

    /// A card's total bonus for a lane: authored base plus play-scoped
    /// modifier.
    #[must_use]
    pub fn total_bonus(&self, stats: &BaseStats, lane: PlayLane) -> i32 {
        stats.bonus(lane) + self.bonus(lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, InstanceId};
    use crate::effects::{Effect, EffectOutcome};

    fn bonus_record(lane: PlayLane, amount: i32) -> AppliedRecord {
        AppliedRecord {
            source: InstanceId::new(1),
            card: CardId::new(1),
            effect: Effect::RunBonus { amount },
            applied: true,
            outcome: EffectOutcome::Requested(ResolutionRequest::PlayBonus { lane, amount }),
        }
    }

    fn negate_record() -> AppliedRecord {
        AppliedRecord {
            source: InstanceId::new(2),
            card: CardId::new(2),
            effect: Effect::NegateTopReceiver,
            applied: true,
            outcome: EffectOutcome::Requested(ResolutionRequest::NegateTopReceiver {
                source: InstanceId::new(2),
            }),
        }
    }

    #[test]
    fn test_empty_records() {
        let modifiers = PlayModifiers::from_records(&[]);

        assert_eq!(modifiers.bonus(PlayLane::Run), 0);
        assert!(!modifiers.top_receiver_negated());
    }

    #[test]
    fn test_bonuses_accumulate_per_lane() {
        let records = vec![
            bonus_record(PlayLane::Run, 2),
            bonus_record(PlayLane::Run, 1),
            bonus_record(PlayLane::DeepPass, 3),
        ];

        let modifiers = PlayModifiers::from_records(&records);

        assert_eq!(modifiers.bonus(PlayLane::Run), 3);
        assert_eq!(modifiers.bonus(PlayLane::ShortPass), 0);
        assert_eq!(modifiers.bonus(PlayLane::DeepPass), 3);
    }

    #[test]
    fn test_negation_flag() {
        let modifiers = PlayModifiers::from_records(&[negate_record()]);

        assert!(modifiers.top_receiver_negated());
        assert_eq!(modifiers.bonus(PlayLane::Run), 0);
    }

    #[test]
    fn test_non_play_requests_ignored() {
        let stamina = AppliedRecord {
            source: InstanceId::new(1),
            card: CardId::new(1),
            effect: Effect::HealStamina { amount: 2 },
            applied: true,
            outcome: EffectOutcome::Stamina { before: 1, after: 3 },
        };
        let draw = AppliedRecord {
            source: InstanceId::new(1),
            card: CardId::new(1),
            effect: Effect::Draw { count: 2 },
            applied: true,
            outcome: EffectOutcome::Requested(ResolutionRequest::Draw { count: 2 }),
        };

        let modifiers = PlayModifiers::from_records(&[stamina, draw]);

        assert_eq!(modifiers, PlayModifiers::new());
    }

    #[test]
    fn test_total_bonus_adds_base() {
        let stats = BaseStats {
            run_bonus: 3,
            ..BaseStats::default()
        };
        let modifiers = PlayModifiers::from_records(&[bonus_record(PlayLane::Run, 2)]);

        assert_eq!(modifiers.total_bonus(&stats, PlayLane::Run), 5);
        assert_eq!(modifiers.total_bonus(&stats, PlayLane::ShortPass), 0);
    }
}
