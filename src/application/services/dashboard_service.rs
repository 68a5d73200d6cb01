//! Page assembly: concurrent query batches and the shaping of their rows.

use std::future::Future;
use std::sync::Arc;

use crate::domain::repositories::VoterRepository;
use crate::domain::shaping::{
    Dimension, LISTING_PAGE_SIZE, TOP_STATES_LIMIT, shape_breakdown, shape_listing,
    shape_overview_stats, shape_stats, shape_top_states,
};
use crate::domain::views::{LandingView, OverviewView, PaginationMeta, VoterListView};
use crate::error::AppError;

/// Builds the view model for each dashboard page.
///
/// Every page runs a fixed batch of independent queries concurrently and
/// waits for all of them. The first failure is logged with the name of the
/// dataset that failed and the whole page fails with
/// [`AppError::DashboardUnavailable`]; results that did arrive are discarded.
pub struct DashboardService<R: VoterRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VoterRepository + ?Sized> DashboardService<R> {
    /// Creates a new dashboard service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Landing page: headline totals and the race breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DashboardUnavailable`] if either query fails.
    pub async fn landing(&self) -> Result<LandingView, AppError> {
        let (stats, races) = tokio::try_join!(
            load("stats", self.repository.stats()),
            load("race breakdown", self.repository.race_breakdown()),
        )?;

        Ok(LandingView {
            stats: shape_stats(&stats),
            race_breakdown: shape_breakdown(races, Dimension::Race),
        })
    }

    /// Overview page: totals with average age, every breakdown, and the top states.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DashboardUnavailable`] if any query fails.
    pub async fn overview(&self) -> Result<OverviewView, AppError> {
        let (stats, races, genders, ages, states) = tokio::try_join!(
            load("stats", self.repository.stats_with_average_age()),
            load("race breakdown", self.repository.race_breakdown()),
            load("gender breakdown", self.repository.gender_breakdown()),
            load("age breakdown", self.repository.age_breakdown()),
            load(
                "top states",
                self.repository.top_states(TOP_STATES_LIMIT as i64)
            ),
        )?;

        Ok(OverviewView {
            stats: shape_overview_stats(&stats),
            race_breakdown: shape_breakdown(races, Dimension::Race),
            gender_breakdown: shape_breakdown(genders, Dimension::Gender),
            age_breakdown: shape_breakdown(ages, Dimension::AgeBand),
            top_states: shape_top_states(states),
        })
    }

    /// Detail page: totals and one page of individual records, newest first.
    ///
    /// Pages are numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] for page 0 without touching the database.
    /// Returns [`AppError::DashboardUnavailable`] if either query fails.
    pub async fn voters(&self, page: u32) -> Result<VoterListView, AppError> {
        if page == 0 {
            return Err(AppError::bad_request("Page must be greater than 0"));
        }

        let limit = LISTING_PAGE_SIZE as i64;
        let offset = (i64::from(page) - 1) * limit;

        let (stats, voters) = tokio::try_join!(
            load("stats", self.repository.stats()),
            load("voter listing", self.repository.list_voters(offset, limit)),
        )?;

        let stats = shape_stats(&stats);

        Ok(VoterListView {
            pagination: PaginationMeta::new(page, LISTING_PAGE_SIZE as u32, stats.total),
            stats,
            voters: shape_listing(voters),
        })
    }

    /// Checks that the database answers a trivial statement.
    ///
    /// # Errors
    ///
    /// Returns the underlying error unchanged so health checks can report it.
    pub async fn check_database(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

/// Awaits one dataset, logging and masking its failure.
async fn load<T>(
    dataset: &'static str,
    query: impl Future<Output = Result<T, AppError>>,
) -> Result<T, AppError> {
    query.await.map_err(|err| {
        tracing::error!(dataset, error = %err, "Failed to load data from dpi_202412");
        AppError::DashboardUnavailable
    })
}
