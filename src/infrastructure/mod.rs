//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`database`] - MySQL connection provider
//! - [`persistence`] - MySQL repository implementations

pub mod database;
pub mod persistence;
