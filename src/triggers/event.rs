//! Trigger categories and their event payloads.
//!
//! Rules listen for a `TriggerKind`; the shell notifies the engine with
//! a `TriggerEvent`, whose variant *is* the category and whose fields
//! are the category's payload. The engine decides nothing about when a
//! category fires - it only reacts once notified.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::InstanceId;
use crate::core::{PlayLane, SpinResult};

/// Trigger category.
///
/// The five shipped categories are closed; `Custom` carries a
/// data-defined key for categories that exist only in authored content.
/// A custom-keyed rule fires only for events notified with the same
/// key, so a key nothing ever notifies simply never fires.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    /// A slot-machine spin finished.
    SpinComplete,
    /// The offense called a play.
    PlayCall,
    /// Coverage assignments are being checked.
    CoverageCheck,
    /// A ball carrier fumbled.
    Fumble,
    /// A new drive started.
    DriveStart,
    /// Data-defined category.
    Custom(String),
}

/// A defender assigned to cover a lane for the coming play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageAssignment {
    pub defender: InstanceId,
    pub lane: PlayLane,
}

/// An inbound game event with its payload.
///
/// ## Example
///
/// ```
/// use gridiron_rules::core::{IconKind, SpinResult};
/// use gridiron_rules::triggers::{TriggerEvent, TriggerKind};
///
/// let spin = SpinResult::new().with_icon(IconKind::Star, 2);
/// let event = TriggerEvent::spin_complete(spin);
///
/// assert_eq!(event.kind(), TriggerKind::SpinComplete);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TriggerEvent {
    /// Carries the icon tally of the completed spin.
    SpinComplete { spin: SpinResult },
    /// Carries the called play.
    PlayCall { lane: PlayLane },
    /// Carries the coverage assignments under check.
    CoverageCheck {
        assignments: SmallVec<[CoverageAssignment; 4]>,
    },
    /// Carries the fumbling card, when known.
    Fumble { source: Option<InstanceId> },
    /// Carries the down the drive resets to.
    DriveStart { down: i64 },
    /// Data-defined event.
    Custom { key: String },
}

impl TriggerEvent {
    /// The trigger category this event dispatches as.
    #[must_use]
    pub fn kind(&self) -> TriggerKind {
        match self {
            TriggerEvent::SpinComplete { .. } => TriggerKind::SpinComplete,
            TriggerEvent::PlayCall { .. } => TriggerKind::PlayCall,
            TriggerEvent::CoverageCheck { .. } => TriggerKind::CoverageCheck,
            TriggerEvent::Fumble { .. } => TriggerKind::Fumble,
            TriggerEvent::DriveStart { .. } => TriggerKind::DriveStart,
            TriggerEvent::Custom { key } => TriggerKind::Custom(key.clone()),
        }
    }

    /// Create a spin-complete event.
    #[must_use]
    pub fn spin_complete(spin: SpinResult) -> Self {
        Self::SpinComplete { spin }
    }

    /// Create a play-call event.
    #[must_use]
    pub fn play_call(lane: PlayLane) -> Self {
        Self::PlayCall { lane }
    }

    /// Create a coverage-check event.
    #[must_use]
    pub fn coverage_check(assignments: impl IntoIterator<Item = CoverageAssignment>) -> Self {
        Self::CoverageCheck {
            assignments: assignments.into_iter().collect(),
        }
    }

    /// Create a fumble event for a known carrier.
    #[must_use]
    pub fn fumble(source: InstanceId) -> Self {
        Self::Fumble {
            source: Some(source),
        }
    }

    /// Create a drive-start event.
    #[must_use]
    pub fn drive_start(down: i64) -> Self {
        Self::DriveStart { down }
    }

    /// Create a data-defined event.
    #[must_use]
    pub fn custom(key: impl Into<String>) -> Self {
        Self::Custom { key: key.into() }
    }
}
