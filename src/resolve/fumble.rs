//! Seeded fumble resolution.
//!
//! The applicator only raises fumble requests; whether the ball
//! actually comes loose is decided here, behind a seeded `GameRng`, so
//! the same match replays identically. The shell feeds confirmed
//! fumbles back into the engine as `TriggerEvent::fumble`.

use crate::cards::InstanceId;
use crate::core::GameRng;
use crate::effects::{AppliedRecord, ResolutionRequest};

/// Outcome of one fumble check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FumbleOutcome {
    /// The card that forced the check.
    pub source: InstanceId,
    /// Whether the ball came loose.
    pub fumbled: bool,
}

/// Decides fumble outcomes for `ForceFumble` requests.
#[derive(Clone, Debug)]
pub struct FumbleResolver {
    rng: GameRng,
    chance: f64,
}

impl FumbleResolver {
    const DEFAULT_CHANCE: f64 = 0.35;

    /// Create a resolver with the default fumble chance.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            chance: Self::DEFAULT_CHANCE,
        }
    }

    /// Set the fumble chance, clamped to [0, 1] (builder pattern).
    #[must_use]
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Roll every fumble request in a record sequence, in order.
    pub fn resolve(&mut self, records: &[AppliedRecord]) -> Vec<FumbleOutcome> {
        let mut outcomes = Vec::new();
        for record in records {
            if let Some(ResolutionRequest::Fumble { source }) = record.request() {
                outcomes.push(FumbleOutcome {
                    source: *source,
                    fumbled: self.rng.gen_bool(self.chance),
                });
            }
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::effects::{Effect, EffectOutcome};

    fn fumble_record(source: u32) -> AppliedRecord {
        AppliedRecord {
            source: InstanceId::new(source),
            card: CardId::new(1),
            effect: Effect::ForceFumble,
            applied: true,
            outcome: EffectOutcome::Requested(ResolutionRequest::Fumble {
                source: InstanceId::new(source),
            }),
        }
    }

    #[test]
    fn test_only_fumble_requests_roll() {
        let other = AppliedRecord {
            source: InstanceId::new(9),
            card: CardId::new(1),
            effect: Effect::Draw { count: 1 },
            applied: true,
            outcome: EffectOutcome::Requested(ResolutionRequest::Draw { count: 1 }),
        };

        let mut resolver = FumbleResolver::new(42);
        let outcomes = resolver.resolve(&[fumble_record(3), other]);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].source, InstanceId::new(3));
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let records: Vec<_> = (0..20).map(fumble_record).collect();

        let mut a = FumbleResolver::new(42);
        let mut b = FumbleResolver::new(42);

        assert_eq!(a.resolve(&records), b.resolve(&records));
    }

    #[test]
    fn test_chance_bounds() {
        let records: Vec<_> = (0..10).map(fumble_record).collect();

        let mut never = FumbleResolver::new(1).with_chance(0.0);
        assert!(never.resolve(&records).iter().all(|o| !o.fumbled));

        let mut always = FumbleResolver::new(1).with_chance(1.0);
        assert!(always.resolve(&records).iter().all(|o| o.fumbled));

        // Out-of-range chances clamp instead of panicking.
        let mut clamped = FumbleResolver::new(1).with_chance(7.5);
        assert!(clamped.resolve(&records).iter().all(|o| o.fumbled));
    }
}
