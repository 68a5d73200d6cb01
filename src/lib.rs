//! # DPI Dashboard
//!
//! Aggregate statistics over the `dpi_202412` voter-registration table,
//! served as JSON view models with Axum and MySQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - View models, row contracts and shaping rules
//! - **Application Layer** ([`application`]) - Page assembly from concurrent query batches
//! - **Infrastructure Layer** ([`infrastructure`]) - MySQL connection provider and repository
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export MYSQL_HOST="localhost"
//! export MYSQL_USER="dashboard"
//! export MYSQL_PASSWORD="secret"
//! export MYSQL_DATABASE="spr"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::DashboardService;
    pub use crate::domain::repositories::{
        BucketRow, StateCountRow, StatsRow, VoterRepository, VoterRow,
    };
    pub use crate::domain::views::{LandingView, OverviewView, VoterListView};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
