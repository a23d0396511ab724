//! Slot-machine spin results.
//!
//! The engine never runs the reels; it only consumes the icon tally a
//! completed spin produced. `SpinResult` is that tally, queried by
//! slot-icon conditions and passed through to collaborators.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Slot icon types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKind {
    Star,
    Helmet,
    Football,
    Whistle,
    Flag,
}

/// Icon tally for one completed spin.
///
/// ## Example
///
/// ```
/// use gridiron_rules::core::{IconKind, SpinResult};
///
/// let spin = SpinResult::new()
///     .with_icon(IconKind::Star, 2)
///     .with_icon(IconKind::Helmet, 1);
///
/// assert_eq!(spin.count(IconKind::Star), 2);
/// assert_eq!(spin.count(IconKind::Flag), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    counts: FxHashMap<IconKind, u32>,
}

impl SpinResult {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add icons to the tally (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: IconKind, count: u32) -> Self {
        self.add(icon, count);
        self
    }

    /// Add icons to the tally.
    pub fn add(&mut self, icon: IconKind, count: u32) {
        *self.counts.entry(icon).or_insert(0) += count;
    }

    /// Count of one icon type. Missing icons count zero.
    #[must_use]
    pub fn count(&self, icon: IconKind) -> i64 {
        self.counts.get(&icon).copied().unwrap_or(0) as i64
    }

    /// Total icons across all types.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.counts.values().map(|&c| c as i64).sum()
    }

    /// Check if the spin produced no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
