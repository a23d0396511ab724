//! # gridiron-rules
//!
//! Trigger-condition-effect rule engine for a slot-driven football
//! card game.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Cards**: Cards are authored as static definitions
//!    carrying declarative rules. The engine knows the trigger,
//!    condition and effect vocabularies, never concrete card content.
//!
//! 2. **Closed Vocabularies**: Triggers, conditions and effects are
//!    tagged variants matched exhaustively; `Custom` keys cover
//!    data-only extensions and fail closed.
//!
//! 3. **Owned State, Emitted Requests**: The engine mutates only the
//!    state it owns (instance stamina). Everything else - play bonuses,
//!    fumbles, draws, discards - leaves the engine as typed request
//!    records for the collaborator that owns that state.
//!
//! ## Architecture
//!
//! - **Frozen-Snapshot Dispatch**: `notify` iterates an O(1) clone of
//!   the roster order; removals requested mid-cycle apply afterwards,
//!   so no card is skipped or double-evaluated.
//!
//! - **Deterministic Replay**: dispatch is pure ordering over in-memory
//!   state; randomness exists only behind seeded RNG in the fumble
//!   collaborator.
//!
//! ## Modules
//!
//! - `core`: sides, positions, spin tallies, the game view, RNG
//! - `cards`: definitions, instances, the catalog
//! - `triggers`: trigger events and rule conditions
//! - `effects`: effect vocabulary, application, outbound records
//! - `engine`: the roster and the dispatch orchestrator
//! - `resolve`: collaborator-side record consumers

pub mod cards;
pub mod core;
pub mod effects;
pub mod engine;
pub mod error;
pub mod resolve;
pub mod triggers;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameView, IconKind, PlayLane, Position, Side, SideMap, SpinResult,
};

pub use crate::cards::{
    BaseStats, CardCatalog, CardDefinition, CardId, CardInstance, CardKind, FieldEntry,
    InstanceId, Rule,
};

pub use crate::triggers::{
    Comparator, Condition, ConditionContext, ConditionEvaluator, CoverageAssignment,
    TriggerEvent, TriggerKind,
};

pub use crate::effects::{
    encode_records, AppliedRecord, Effect, EffectApplicator, EffectOutcome, ResolutionRequest,
};

pub use crate::engine::{Roster, RuleEngine};

pub use crate::error::EngineError;

pub use crate::resolve::{DeckRequests, FumbleOutcome, FumbleResolver, PlayModifiers};
