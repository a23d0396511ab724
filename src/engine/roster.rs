//! The roster of cards in play.
//!
//! The roster is the one owned, explicitly passed collection of live
//! card instances: constructed at match start, torn down at match end.
//! Iteration follows play order (the order cards entered). The order
//! list is an `im::Vector`, so a dispatch can freeze it with an O(1)
//! clone and keep iterating safely while removals queue up.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;

use crate::cards::{CardCatalog, CardDefinition, CardId, CardInstance, InstanceId};
use crate::core::{Position, Side};
use crate::error::EngineError;

/// The live collection of card instances currently in play.
///
/// Identities are unique for the lifetime of the roster: ids are never
/// reused, so no two entries can alias.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    order: Vector<InstanceId>,
    cards: FxHashMap<InstanceId, CardInstance>,
    next_id: u32,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring a card into play from the catalog.
    ///
    /// Fails with `UnknownCard` if the catalog has no such definition;
    /// an instance cannot exist without one.
    pub fn enter_play(
        &mut self,
        catalog: &CardCatalog,
        card: CardId,
        side: Side,
    ) -> Result<InstanceId, EngineError> {
        let definition = catalog.get(card).ok_or(EngineError::UnknownCard(card))?;
        Ok(self.enter_play_with(definition, side))
    }

    /// Bring a card into play with a definition handle already in hand.
    pub fn enter_play_with(&mut self, definition: Arc<CardDefinition>, side: Side) -> InstanceId {
        let id = InstanceId::new(self.next_id);
        self.next_id += 1;
        self.order.push_back(id);
        self.cards.insert(id, CardInstance::new(id, definition, side));
        id
    }

    /// Take a card out of play. Returns the evicted instance, or `None`
    /// if it was not in play.
    pub fn leave_play(&mut self, id: InstanceId) -> Option<CardInstance> {
        let instance = self.cards.remove(&id)?;
        self.order.retain(|&entry| entry != id);
        Some(instance)
    }

    /// Get an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    /// Get a mutable instance by id.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    /// Check if an instance is in play.
    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of cards in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if nothing is in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ids in play order. An O(1) clone of the order list; the returned
    /// vector is unaffected by later roster changes.
    #[must_use]
    pub fn snapshot(&self) -> Vector<InstanceId> {
        self.order.clone()
    }

    /// Iterate instances in play order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.order.iter().filter_map(move |id| self.cards.get(id))
    }

    /// Count in-play cards on a side matching a position.
    ///
    /// Shells use this to assemble the board counts of a `GameView`.
    #[must_use]
    pub fn count_position(&self, side: Side, position: Position) -> i64 {
        self.iter()
            .filter(|c| c.side == side && c.definition().position == Some(position))
            .count() as i64
    }
}
