//! Card definitions - static authored card data.
//!
//! `CardDefinition` holds the immutable properties of a card: identity,
//! category, base attributes, and the ordered rules that make it react
//! to game events. Definitions are produced by the authoring tool,
//! registered read-only, and shared by every instance of the card.
//!
//! Run-time state (current stamina, field history) lives in
//! `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayLane, Position};
use crate::effects::Effect;
use crate::triggers::{Condition, TriggerKind};

/// Unique identifier for a card definition.
///
/// Identifies the authored card (e.g. "Pocket General"), not a specific
/// instance in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card categories.
///
/// The category decides which base attributes are meaningful and how
/// the shell deploys the card; the rule engine itself treats all
/// categories uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    OffensivePlayer,
    DefensivePlayer,
    SpecialTeams,
    OffensiveEnhancer,
    DefensiveEnhancer,
    ComboEnhancer,
    LiveBall,
    HeadCoach,
}

impl CardKind {
    /// Player cards take the field and carry stamina.
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(
            self,
            CardKind::OffensivePlayer | CardKind::DefensivePlayer | CardKind::SpecialTeams
        )
    }

    /// Enhancer cards exist to carry rules.
    #[must_use]
    pub const fn is_enhancer(self) -> bool {
        matches!(
            self,
            CardKind::OffensiveEnhancer | CardKind::DefensiveEnhancer | CardKind::ComboEnhancer
        )
    }
}

/// Base numeric attributes of a card.
///
/// Only the subset relevant to the card's kind is meaningful; the rest
/// stays zero. Offensive players carry lane bonuses, defensive players
/// lane coverage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseStats {
    pub stamina: i32,
    pub grit: i32,
    pub run_bonus: i32,
    pub short_pass_bonus: i32,
    pub deep_pass_bonus: i32,
    pub run_coverage: i32,
    pub short_coverage: i32,
    pub deep_coverage: i32,
}

impl BaseStats {
    /// The authored bonus for a play lane.
    #[must_use]
    pub const fn bonus(&self, lane: PlayLane) -> i32 {
        match lane {
            PlayLane::Run => self.run_bonus,
            PlayLane::ShortPass => self.short_pass_bonus,
            PlayLane::DeepPass => self.deep_pass_bonus,
        }
    }

    /// The authored coverage for a play lane.
    #[must_use]
    pub const fn coverage(&self, lane: PlayLane) -> i32 {
        match lane {
            PlayLane::Run => self.run_coverage,
            PlayLane::ShortPass => self.short_coverage,
            PlayLane::DeepPass => self.deep_coverage,
        }
    }
}

/// One trigger-condition-effect unit attached to a definition.
///
/// When the trigger category fires and the condition holds against the
/// current game view, the effect is applied to the owning instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The event category this rule listens for.
    pub trigger: TriggerKind,
    /// Predicate over the game view. `Always` fires unconditionally.
    pub condition: Condition,
    /// What happens when the condition holds.
    pub effect: Effect,
}

impl Rule {
    /// Create an unconditional rule.
    #[must_use]
    pub fn new(trigger: TriggerKind, effect: Effect) -> Self {
        Self {
            trigger,
            condition: Condition::Always,
            effect,
        }
    }

    /// Set the condition (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }
}

/// Static card definition.
///
/// Immutable after authoring. Many instances may reference the same
/// definition through a shared handle.
///
/// ## Example
///
/// ```
/// use gridiron_rules::cards::{BaseStats, CardDefinition, CardId, CardKind, Rule};
/// use gridiron_rules::effects::Effect;
/// use gridiron_rules::triggers::TriggerKind;
///
/// let qb = CardDefinition::new(CardId::new(1), "Pocket General", CardKind::OffensivePlayer)
///     .with_stats(BaseStats { stamina: 3, short_pass_bonus: 2, ..BaseStats::default() })
///     .with_rule(Rule::new(
///         TriggerKind::PlayCall,
///         Effect::ShortPassBonus { amount: 1 },
///     ));
///
/// assert_eq!(qb.rules.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Card name (display and debugging).
    pub name: String,

    /// Rules text shown to the player.
    #[serde(default)]
    pub description: String,

    /// Flavor text.
    #[serde(default)]
    pub flavor: String,

    /// Art asset reference, resolved by the presentation layer.
    #[serde(default)]
    pub art: String,

    /// Card category.
    pub kind: CardKind,

    /// Board position, for player cards.
    #[serde(default)]
    pub position: Option<Position>,

    /// Base numeric attributes.
    #[serde(default)]
    pub stats: BaseStats,

    /// Ordered rules. Dispatch preserves this order.
    #[serde(default)]
    pub rules: SmallVec<[Rule; 2]>,
}

impl CardDefinition {
    /// Create a new definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            flavor: String::new(),
            art: String::new(),
            kind,
            position: None,
            stats: BaseStats::default(),
            rules: SmallVec::new(),
        }
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the flavor text (builder pattern).
    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    /// Set the art reference (builder pattern).
    #[must_use]
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = art.into();
        self
    }

    /// Set the board position (builder pattern).
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the base attributes (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    /// Append a rule (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}
