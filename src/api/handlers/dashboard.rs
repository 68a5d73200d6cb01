//! Handlers for the three dashboard pages.
//!
//! Each handler delegates to [`crate::application::services::DashboardService`]
//! and returns the resulting view model as JSON. Any query failure surfaces as
//! a plain `500 Unable to load dashboard data`.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::pagination::PageParams;
use crate::domain::views::{LandingView, OverviewView, VoterListView};
use crate::error::AppError;
use crate::state::AppState;

/// Landing page data.
///
/// # Endpoint
///
/// `GET /api/dashboard`
///
/// # Response
///
/// ```json
/// {
///   "stats": { "total": 120, "votersPru15": 98, "votersPrn15": 71 },
///   "raceBreakdown": [
///     { "code": "M", "label": "Melayu", "total": 80, "pru15": 66, "prn15": 50 }
///   ]
/// }
/// ```
pub async fn landing_handler(State(state): State<AppState>) -> Result<Json<LandingView>, AppError> {
    let view = state.dashboard_service.landing().await?;
    Ok(Json(view))
}

/// Overview page data: totals with average age, race, gender and age
/// breakdowns, and the five most populous states.
///
/// # Endpoint
///
/// `GET /api/dashboard/overview`
pub async fn overview_handler(
    State(state): State<AppState>,
) -> Result<Json<OverviewView>, AppError> {
    let view = state.dashboard_service.overview().await?;
    Ok(Json(view))
}

/// Paginated voter listing, highest identifier first.
///
/// # Endpoint
///
/// `GET /api/dashboard/voters`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1), 25 records per page
///
/// # Errors
///
/// Returns 400 Bad Request if `page` is 0 or not a number.
pub async fn voters_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<VoterListView>, AppError> {
    let view = state.dashboard_service.voters(params.page()).await?;
    Ok(Json(view))
}
