//! HTTP API layer.
//!
//! Translates requests into dashboard service calls and serializes the
//! resulting view models.
//!
//! # Modules
//!
//! - [`dto`] - Query parameters and health report
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
