//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers and the admin CLI
//! one call per page.
//!
//! # Available Services
//!
//! - [`services::dashboard_service::DashboardService`] - Landing, overview and voter listing pages

pub mod services;
