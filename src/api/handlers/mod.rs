//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod dashboard;
pub mod health;

pub use dashboard::{landing_handler, overview_handler, voters_handler};
pub use health::health_handler;
