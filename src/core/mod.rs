//! Core types: sides, positions, spin tallies, the game-state view,
//! and deterministic RNG.

pub mod rng;
pub mod side;
pub mod spin;
pub mod state;

pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use spin::{IconKind, SpinResult};
pub use state::{GameView, PlayLane, Position};
