//! Repository trait definitions for the domain layer.
//!
//! The trait is implemented in `crate::infrastructure::persistence`; a mock
//! implementation is generated via `mockall` for unit tests.

pub mod voter_repository;

pub use voter_repository::{BucketRow, StateCountRow, StatsRow, VoterRepository, VoterRow};

#[cfg(test)]
pub use voter_repository::MockVoterRepository;
