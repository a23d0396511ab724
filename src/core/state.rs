//! Game-state snapshot consumed during rule evaluation.
//!
//! `GameView` is the read-only query surface the engine sees for one
//! dispatch: per-side board counts by position, the current down, and
//! the icon tally of the latest spin. The game shell assembles it from
//! the collaborators that own the underlying state; the engine never
//! writes to it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::side::{Side, SideMap};
use super::spin::SpinResult;

/// Board position categories queried by position-count conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Quarterback,
    RunningBack,
    Receiver,
    TightEnd,
    Lineman,
    Linebacker,
    Cornerback,
    Safety,
    Kicker,
}

/// The three lanes a play can attack through.
///
/// Play calls, bonus effects and coverage stats all index by lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayLane {
    Run,
    ShortPass,
    DeepPass,
}

/// Read-only snapshot of the game state for one dispatch.
///
/// Counts default to zero and the down to zero; the shell fills in
/// whatever the current rule set queries.
///
/// ## Example
///
/// ```
/// use gridiron_rules::core::{GameView, Position, Side};
///
/// let view = GameView::new()
///     .with_down(2)
///     .with_board_count(Side::Home, Position::Lineman, 3);
///
/// assert_eq!(view.down(), 2);
/// assert_eq!(view.board_count(Side::Home, Position::Lineman), 3);
/// assert_eq!(view.board_count(Side::Away, Position::Lineman), 0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameView {
    board: SideMap<FxHashMap<Position, i64>>,
    down: i64,
    spin: SpinResult,
}

impl GameView {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current down (builder pattern).
    #[must_use]
    pub fn with_down(mut self, down: i64) -> Self {
        self.down = down;
        self
    }

    /// Set a board count (builder pattern).
    #[must_use]
    pub fn with_board_count(mut self, side: Side, position: Position, count: i64) -> Self {
        self.board[side].insert(position, count);
        self
    }

    /// Attach the latest spin result (builder pattern).
    #[must_use]
    pub fn with_spin(mut self, spin: SpinResult) -> Self {
        self.spin = spin;
        self
    }

    /// Count of a side's in-play cards matching a position.
    #[must_use]
    pub fn board_count(&self, side: Side, position: Position) -> i64 {
        self.board[side].get(&position).copied().unwrap_or(0)
    }

    /// The current down.
    #[must_use]
    pub fn down(&self) -> i64 {
        self.down
    }

    /// Icon tally of the latest completed spin.
    #[must_use]
    pub fn spin(&self) -> &SpinResult {
        &self.spin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IconKind;

    #[test]
    fn test_empty_view() {
        let view = GameView::new();

        assert_eq!(view.down(), 0);
        assert_eq!(view.board_count(Side::Home, Position::Quarterback), 0);
        assert!(view.spin().is_empty());
    }

    #[test]
    fn test_board_counts_per_side() {
        let view = GameView::new()
            .with_board_count(Side::Home, Position::Lineman, 3)
            .with_board_count(Side::Away, Position::Lineman, 1)
            .with_board_count(Side::Away, Position::Linebacker, 2);

        assert_eq!(view.board_count(Side::Home, Position::Lineman), 3);
        assert_eq!(view.board_count(Side::Away, Position::Lineman), 1);
        assert_eq!(view.board_count(Side::Away, Position::Linebacker), 2);
        assert_eq!(view.board_count(Side::Home, Position::Linebacker), 0);
    }

    #[test]
    fn test_spin_attachment() {
        let spin = SpinResult::new().with_icon(IconKind::Star, 2);
        let view = GameView::new().with_spin(spin);

        assert_eq!(view.spin().count(IconKind::Star), 2);
    }
}
