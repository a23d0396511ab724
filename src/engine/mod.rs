//! The rule engine orchestrator and the roster it owns.

pub mod dispatch;
pub mod roster;

pub use dispatch::RuleEngine;
pub use roster::Roster;
