//! Trigger dispatch.
//!
//! `RuleEngine` owns the roster and turns inbound events into ordered
//! applied-effect records. One dispatch cycle: freeze the roster order,
//! walk roster order then rule order, evaluate each matching rule's
//! condition, apply on success, and only after the walk completes drain
//! the roster removals that effects requested. Determinism: the same
//! roster, view and event always produce the same record sequence.

use crate::cards::{CardCatalog, CardId, CardInstance, InstanceId};
use crate::core::{GameView, Side};
use crate::effects::{AppliedRecord, EffectApplicator};
use crate::error::EngineError;
use crate::triggers::{ConditionEvaluator, ConditionContext, TriggerEvent};

use super::roster::Roster;

/// Deferred roster change requested while a dispatch is in flight.
#[derive(Clone, Copy, Debug)]
enum RosterOp {
    Remove(InstanceId),
}

/// The rule engine orchestrator.
///
/// ## Example
///
/// ```
/// use gridiron_rules::cards::{CardCatalog, CardDefinition, CardId, CardKind, Rule};
/// use gridiron_rules::core::{GameView, Side};
/// use gridiron_rules::effects::Effect;
/// use gridiron_rules::engine::RuleEngine;
/// use gridiron_rules::triggers::{TriggerEvent, TriggerKind};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(
///         CardDefinition::new(CardId::new(1), "Route Artist", CardKind::OffensivePlayer)
///             .with_rule(Rule::new(TriggerKind::PlayCall, Effect::ShortPassBonus { amount: 2 })),
///     )
///     .unwrap();
///
/// let mut engine = RuleEngine::new();
/// engine.enter_play(&catalog, CardId::new(1), Side::Home).unwrap();
///
/// let records = engine.notify(
///     &TriggerEvent::play_call(gridiron_rules::core::PlayLane::ShortPass),
///     &GameView::new(),
/// );
/// assert_eq!(records.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RuleEngine {
    roster: Roster,
    pending: Vec<RosterOp>,
}

impl RuleEngine {
    /// Create an engine with an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Bring a card into play from the catalog.
    pub fn enter_play(
        &mut self,
        catalog: &CardCatalog,
        card: CardId,
        side: Side,
    ) -> Result<InstanceId, EngineError> {
        self.roster.enter_play(catalog, card, side)
    }

    /// Take a card out of play (KO, end of game).
    pub fn leave_play(&mut self, id: InstanceId) -> Option<CardInstance> {
        self.roster.leave_play(id)
    }

    /// Get an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.roster.get(id)
    }

    /// Record a field entry for an instance.
    ///
    /// Called by the play-resolution collaborator when the card takes
    /// the field; first-play conditions read this history.
    pub fn record_field_entry(&mut self, id: InstanceId, down: i64) -> Result<(), EngineError> {
        let instance = self.roster.get_mut(id).ok_or(EngineError::NotInPlay(id))?;
        instance.record_field_entry(down);
        Ok(())
    }

    /// Mark an instance's first snap as taken.
    ///
    /// Called by the play-resolution collaborator.
    pub fn mark_first_snap(&mut self, id: InstanceId) -> Result<(), EngineError> {
        let instance = self.roster.get_mut(id).ok_or(EngineError::NotInPlay(id))?;
        instance.mark_first_snap();
        Ok(())
    }

    /// Spend stamina on an instance after a resolved play.
    ///
    /// Called by the play-resolution collaborator.
    pub fn spend_stamina(&mut self, id: InstanceId, amount: i32) -> Result<(), EngineError> {
        let instance = self.roster.get_mut(id).ok_or(EngineError::NotInPlay(id))?;
        instance.spend_stamina(amount);
        Ok(())
    }

    /// Dispatch a trigger event against the current roster.
    ///
    /// Returns the applied-effect records in roster order, then rule
    /// order. An event whose category matches no rules returns an empty
    /// sequence and changes nothing.
    pub fn notify(&mut self, event: &TriggerEvent, view: &GameView) -> Vec<AppliedRecord> {
        self.notify_with(event, view, None)
    }

    /// Dispatch with a hook for data-defined condition keys.
    pub fn notify_with(
        &mut self,
        event: &TriggerEvent,
        view: &GameView,
        eval_custom: Option<&dyn Fn(&str, &TriggerEvent, &GameView) -> bool>,
    ) -> Vec<AppliedRecord> {
        let kind = event.kind();

        // Freeze the roster order. Removals requested by effects during
        // this cycle land in `pending` and apply after the walk, so a
        // card that discards itself still finishes its own rules and
        // every later card still evaluates.
        let snapshot = self.roster.snapshot();
        let mut records = Vec::new();

        for id in snapshot.iter().copied() {
            let Some(definition) = self.roster.get(id).map(CardInstance::definition_handle)
            else {
                continue;
            };

            for rule in &definition.rules {
                if rule.trigger != kind {
                    continue;
                }

                let Some(caster) = self.roster.get(id) else {
                    break;
                };
                let mut ctx = ConditionContext::new(view, event, caster);
                if let Some(eval) = eval_custom {
                    ctx = ctx.with_custom_eval(eval);
                }
                if !ConditionEvaluator::evaluate(&rule.condition, &ctx) {
                    continue;
                }

                let Some(caster) = self.roster.get_mut(id) else {
                    break;
                };
                let record = EffectApplicator::apply(&rule.effect, caster);
                if record.leaves_play() {
                    self.pending.push(RosterOp::Remove(id));
                }
                records.push(record);
            }
        }

        tracing::debug!(trigger = ?kind, fired = records.len(), "dispatch complete");
        self.drain_pending();
        records
    }

    fn drain_pending(&mut self) {
        for op in std::mem::take(&mut self.pending) {
            match op {
                RosterOp::Remove(id) => {
                    self.roster.leave_play(id);
                }
            }
        }
    }
}
