//! Rule conditions and their evaluation.
//!
//! Conditions are closed tagged variants evaluated by exhaustive match;
//! every numeric comparison routes through the one shared `Comparator`
//! so operator semantics are defined exactly once. Evaluation is a pure
//! query - the engine may re-evaluate the same rule any number of times
//! without side effects.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{GameView, IconKind, Position};

use super::event::TriggerEvent;

/// Comparison operator shared by every numeric condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Comparator {
    /// Apply the operator to two integers.
    #[must_use]
    pub fn compare(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparator::Equal => lhs == rhs,
            Comparator::NotEqual => lhs != rhs,
            Comparator::Greater => lhs > rhs,
            Comparator::GreaterOrEqual => lhs >= rhs,
            Comparator::Less => lhs < rhs,
            Comparator::LessOrEqual => lhs <= rhs,
        }
    }
}

/// A boolean predicate over the game-state snapshot.
///
/// A rule with no meaningful condition uses `Always`; unknown payloads
/// arrive as `Custom` keys, which fail closed when no evaluator hook is
/// installed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Compare the caster side's count of `own` against the opposing
    /// side's count of `other`.
    PositionCount {
        own: Position,
        other: Position,
        cmp: Comparator,
    },

    /// The card has never entered the field this game.
    FirstPlay,

    /// Compare the current down against a required value.
    Down { cmp: Comparator, value: i64 },

    /// Compare the spin tally of one icon against a required count.
    IconCount {
        icon: IconKind,
        cmp: Comparator,
        count: i64,
    },

    // === Combinators ===
    /// All conditions must hold.
    All(Vec<Condition>),

    /// At least one condition must hold.
    Any(Vec<Condition>),

    /// Condition must not hold.
    Not(Box<Condition>),

    /// No condition: always holds.
    Always,

    /// Data-defined condition key, resolved by a game-provided hook.
    /// Without a hook the condition is false.
    Custom(String),
}

impl Condition {
    /// Create a position-count comparison.
    #[must_use]
    pub fn position_count(own: Position, other: Position, cmp: Comparator) -> Self {
        Self::PositionCount { own, other, cmp }
    }

    /// Create a down check.
    #[must_use]
    pub fn down(cmp: Comparator, value: i64) -> Self {
        Self::Down { cmp, value }
    }

    /// Create a slot-icon-count check.
    #[must_use]
    pub fn icon_count(icon: IconKind, cmp: Comparator, count: i64) -> Self {
        Self::IconCount { icon, cmp, count }
    }

    /// Combine with another condition under AND.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        match self {
            Self::All(mut conditions) => {
                conditions.push(other);
                Self::All(conditions)
            }
            _ => Self::All(vec![self, other]),
        }
    }

    /// Combine with another condition under OR.
    #[must_use]
    pub fn or(self, other: Condition) -> Self {
        match self {
            Self::Any(mut conditions) => {
                conditions.push(other);
                Self::Any(conditions)
            }
            _ => Self::Any(vec![self, other]),
        }
    }

    /// Negate this condition.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

/// Everything a condition may inspect.
///
/// `target` is reserved for targeted conditions; the built-in set reads
/// only the caster and the view.
pub struct ConditionContext<'a> {
    /// The game-state snapshot for this dispatch.
    pub view: &'a GameView,
    /// The event that started the dispatch.
    pub event: &'a TriggerEvent,
    /// The instance whose rule is being evaluated.
    pub caster: &'a CardInstance,
    /// An optional second instance the rule is aimed at.
    pub target: Option<&'a CardInstance>,
    /// Hook for data-defined condition keys (provided by the game).
    pub eval_custom: Option<&'a dyn Fn(&str, &TriggerEvent, &GameView) -> bool>,
}

impl<'a> ConditionContext<'a> {
    /// Create a context for one caster.
    pub fn new(view: &'a GameView, event: &'a TriggerEvent, caster: &'a CardInstance) -> Self {
        Self {
            view,
            event,
            caster,
            target: None,
            eval_custom: None,
        }
    }

    /// Attach a target instance.
    #[must_use]
    pub fn with_target(mut self, target: &'a CardInstance) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach a custom condition evaluator.
    #[must_use]
    pub fn with_custom_eval(
        mut self,
        eval: &'a dyn Fn(&str, &TriggerEvent, &GameView) -> bool,
    ) -> Self {
        self.eval_custom = Some(eval);
        self
    }
}

/// Evaluator for rule conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Check whether a condition holds. Pure: mutates nothing.
    pub fn evaluate(condition: &Condition, ctx: &ConditionContext) -> bool {
        match condition {
            Condition::PositionCount { own, other, cmp } => {
                let side = ctx.caster.side;
                let ours = ctx.view.board_count(side, *own);
                let theirs = ctx.view.board_count(side.opponent(), *other);
                cmp.compare(ours, theirs)
            }

            Condition::FirstPlay => !ctx.caster.has_entered_field(),

            Condition::Down { cmp, value } => cmp.compare(ctx.view.down(), *value),

            Condition::IconCount { icon, cmp, count } => {
                cmp.compare(ctx.view.spin().count(*icon), *count)
            }

            Condition::All(conditions) => conditions.iter().all(|c| Self::evaluate(c, ctx)),

            Condition::Any(conditions) => conditions.iter().any(|c| Self::evaluate(c, ctx)),

            Condition::Not(inner) => !Self::evaluate(inner, ctx),

            Condition::Always => true,

            Condition::Custom(key) => match ctx.eval_custom {
                Some(eval) => eval(key, ctx.event, ctx.view),
                // Unrecognized payloads fail closed.
                None => false,
            },
        }
    }
}
