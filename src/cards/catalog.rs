//! Card catalog for definition lookup.
//!
//! The catalog stores every authored definition for a match and hands
//! out shared handles. The engine never mutates a definition after
//! registration.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::EngineError;

use super::definition::{CardDefinition, CardId, CardKind};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use gridiron_rules::cards::{CardCatalog, CardDefinition, CardId, CardKind};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDefinition::new(CardId::new(1), "Pocket General", CardKind::OffensivePlayer))
///     .unwrap();
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Pocket General");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition.
    ///
    /// Fails with `DuplicateCard` if the id is already taken.
    pub fn register(&mut self, card: CardDefinition) -> Result<CardId, EngineError> {
        let id = card.id;
        if self.cards.contains_key(&id) {
            return Err(EngineError::DuplicateCard(id));
        }
        self.cards.insert(id, Arc::new(card));
        Ok(id)
    }

    /// Get a shared handle to a definition.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<Arc<CardDefinition>> {
        self.cards.get(&id).map(Arc::clone)
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }

    /// Find definitions by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values().filter(move |c| c.kind == kind)
    }
}
