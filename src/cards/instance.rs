//! Card instances - run-time state for cards in play.
//!
//! A `CardInstance` wraps exactly one shared handle to its definition
//! and owns the mutable overlay: current stamina, the first-snap flag,
//! and an append-only history of field entries. Instances live on the
//! roster from the moment the card enters play until it leaves.
//!
//! Mutation discipline: stamina heals go through the effect applicator;
//! stamina spend, the first-snap flag and field entries belong to the
//! external play-resolution collaborator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::Side;

use super::definition::{CardDefinition, CardId};

/// Unique identifier for a card instance on the roster.
///
/// Many instances of the same `CardId` can be in play at once; each
/// gets its own `InstanceId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
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

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// One recorded entry onto the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// The down when the card took the field.
    pub down: i64,
}

/// A card in play.
///
/// References its definition through a shared handle; the definition is
/// never mutated. Stamina starts at the definition maximum and stays
/// within `0..=max` for the instance's lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardInstance {
    /// Roster identity of this instance.
    pub id: InstanceId,

    /// Which side fields this card.
    pub side: Side,

    definition: Arc<CardDefinition>,
    stamina: i32,
    first_snap_used: bool,
    entries: Vec<FieldEntry>,
}

impl CardInstance {
    /// Create an instance from a definition handle.
    ///
    /// Normally called through the roster, which allocates the id.
    /// Stamina initializes from the definition.
    #[must_use]
    pub fn new(id: InstanceId, definition: Arc<CardDefinition>, side: Side) -> Self {
        let stamina = definition.stats.stamina;
        Self {
            id,
            side,
            definition,
            stamina,
            first_snap_used: false,
            entries: Vec::new(),
        }
    }

    /// The definition behind this instance.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    /// A shared handle to the definition.
    #[must_use]
    pub fn definition_handle(&self) -> Arc<CardDefinition> {
        Arc::clone(&self.definition)
    }

    /// The definition's card id.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.definition.id
    }

    /// Current stamina.
    #[must_use]
    pub fn stamina(&self) -> i32 {
        self.stamina
    }

    /// The definition's stamina ceiling.
    #[must_use]
    pub fn max_stamina(&self) -> i32 {
        self.definition.stats.stamina
    }

    /// True once stamina is spent down to zero.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.stamina == 0
    }

    /// Spend stamina for a resolved play. Floored at zero; zero or
    /// negative amounts are a no-op.
    pub fn spend_stamina(&mut self, amount: i32) {
        if amount > 0 {
            self.stamina = self.stamina.saturating_sub(amount).max(0);
        }
    }

    /// Restore stamina, clamped to the definition maximum. Zero or
    /// negative amounts are a no-op. Returns the stamina after the
    /// heal.
    pub(crate) fn heal_stamina(&mut self, amount: i32) -> i32 {
        if amount > 0 {
            self.stamina = self.stamina.saturating_add(amount).min(self.max_stamina());
        }
        self.stamina
    }

    /// Whether the first snap has been taken.
    #[must_use]
    pub fn first_snap_used(&self) -> bool {
        self.first_snap_used
    }

    /// Mark the first snap as taken.
    pub fn mark_first_snap(&mut self) {
        self.first_snap_used = true;
    }

    /// True once the card has entered the field at least once.
    #[must_use]
    pub fn has_entered_field(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Append a field entry. The history only ever grows.
    pub fn record_field_entry(&mut self, down: i64) {
        self.entries.push(FieldEntry { down });
    }

    /// The field-entry history, oldest first.
    #[must_use]
    pub fn field_entries(&self) -> &[FieldEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BaseStats, CardKind};

    fn test_definition(stamina: i32) -> Arc<CardDefinition> {
        Arc::new(
            CardDefinition::new(CardId::new(1), "Test Player", CardKind::OffensivePlayer)
                .with_stats(BaseStats {
                    stamina,
                    ..BaseStats::default()
                }),
        )
    }

    #[test]
    fn test_instance_id_display() {
        assert_eq!(format!("{}", InstanceId::new(9)), "Instance(9)");
    }

    #[test]
    fn test_stamina_initialized_from_definition() {
        let instance = CardInstance::new(InstanceId::new(0), test_definition(4), Side::Home);

        assert_eq!(instance.stamina(), 4);
        assert_eq!(instance.max_stamina(), 4);
        assert!(!instance.is_exhausted());
    }

    #[test]
    fn test_spend_stamina_floors_at_zero() {
        let mut instance = CardInstance::new(InstanceId::new(0), test_definition(3), Side::Home);

        instance.spend_stamina(2);
        assert_eq!(instance.stamina(), 1);

        instance.spend_stamina(5);
        assert_eq!(instance.stamina(), 0);
        assert!(instance.is_exhausted());

        instance.spend_stamina(-1);
        assert_eq!(instance.stamina(), 0);
    }

    #[test]
    fn test_heal_stamina_clamps_to_max() {
        let mut instance = CardInstance::new(InstanceId::new(0), test_definition(5), Side::Home);
        instance.spend_stamina(4);

        assert_eq!(instance.heal_stamina(2), 3);
        assert_eq!(instance.heal_stamina(10), 5);
    }

    #[test]
    fn test_heal_stamina_nonpositive_is_noop() {
        let mut instance = CardInstance::new(InstanceId::new(0), test_definition(5), Side::Home);
        instance.spend_stamina(2);

        assert_eq!(instance.heal_stamina(0), 3);
        assert_eq!(instance.heal_stamina(-4), 3);
    }

    #[test]
    fn test_first_snap_flag() {
        let mut instance = CardInstance::new(InstanceId::new(0), test_definition(3), Side::Away);

        assert!(!instance.first_snap_used());
        instance.mark_first_snap();
        assert!(instance.first_snap_used());
    }

    #[test]
    fn test_field_entry_history() {
        let mut instance = CardInstance::new(InstanceId::new(0), test_definition(3), Side::Home);

        assert!(!instance.has_entered_field());
        assert!(instance.field_entries().is_empty());

        instance.record_field_entry(1);
        instance.record_field_entry(3);

        assert!(instance.has_entered_field());
        assert_eq!(
            instance.field_entries(),
            &[FieldEntry { down: 1 }, FieldEntry { down: 3 }]
        );
    }

    #[test]
    fn test_shared_definition() {
        let definition = test_definition(3);
        let a = CardInstance::new(InstanceId::new(0), Arc::clone(&definition), Side::Home);
        let b = CardInstance::new(InstanceId::new(1), Arc::clone(&definition), Side::Away);

        assert_eq!(a.card_id(), b.card_id());
        assert!(Arc::ptr_eq(&a.definition_handle(), &b.definition_handle()));
    }
}
