//! Engine error taxonomy.
//!
//! Only construction-time failures surface as errors. Rule evaluation
//! and effect application never do: malformed payloads degrade to
//! fail-closed conditions or diagnostic records instead, so a single
//! bad rule cannot abort a dispatch cycle.

use thiserror::Error;

use crate::cards::{CardId, InstanceId};

/// Errors from construction-time operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A card was brought into play from a definition the catalog does
    /// not know. An instance cannot exist without a definition.
    #[error("unknown card definition {0}")]
    UnknownCard(CardId),

    /// A definition with this id is already registered.
    #[error("card definition {0} already registered")]
    DuplicateCard(CardId),

    /// The referenced instance is not on the roster.
    #[error("card instance {0} is not in play")]
    NotInPlay(InstanceId),
}
