//! API route configuration.

use crate::api::handlers::{landing_handler, overview_handler, voters_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Dashboard page routes.
///
/// # Endpoints
///
/// - `GET /dashboard`          - Headline totals and race breakdown
/// - `GET /dashboard/overview` - All breakdowns and top states
/// - `GET /dashboard/voters`   - Paginated voter listing
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(landing_handler))
        .route("/dashboard/overview", get(overview_handler))
        .route("/dashboard/voters", get(voters_handler))
}
