//! Effect vocabulary, application, and outbound records.

pub mod applicator;
pub mod effect;

pub use applicator::EffectApplicator;
pub use effect::{encode_records, AppliedRecord, Effect, EffectOutcome, ResolutionRequest};
