//! Data Transfer Objects for API requests and responses.
//!
//! Page bodies are the domain view models themselves; this module only holds
//! query parameters and the health report.

pub mod health;
pub mod pagination;
