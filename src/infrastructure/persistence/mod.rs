//! MySQL repository implementations.
//!
//! Statements are plain SQL strings decoded at runtime through `sqlx::FromRow`,
//! so the crate builds without a reachable database.
//!
//! # Repositories
//!
//! - [`MySqlVoterRepository`] - Aggregate reads over `dpi_202412`

pub mod mysql_voter_repository;

pub use mysql_voter_repository::MySqlVoterRepository;
