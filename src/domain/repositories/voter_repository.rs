//! Repository trait for aggregate reads over `dpi_202412`.

use crate::error::AppError;
use async_trait::async_trait;

/// Raw totals row. Every column may come back `NULL` (e.g. `SUM` over an
/// empty table), so nothing here is trusted until it has been shaped.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct StatsRow {
    pub total: Option<i64>,
    pub voters_pru15: Option<i64>,
    pub voters_prn15: Option<i64>,
    #[sqlx(default)]
    pub average_age: Option<f64>,
}

/// One group of a breakdown query.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct BucketRow {
    pub code: Option<String>,
    pub total: Option<i64>,
    pub pru15: Option<i64>,
    pub prn15: Option<i64>,
}

/// One individual record of the voter listing.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct VoterRow {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub state: Option<String>,
    pub parliament: Option<String>,
    pub dun: Option<String>,
    pub race: Option<String>,
    pub gender: Option<String>,
}

/// Record count for a single state.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct StateCountRow {
    pub state: Option<String>,
    pub total: Option<i64>,
}

/// Read-only access to the voter-registration table.
///
/// Every method is a single statement with no dependency on the others, so
/// callers are free to run them concurrently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MySqlVoterRepository`] - MySQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoterRepository: Send + Sync {
    /// Row count and per-election registration totals.
    async fn stats(&self) -> Result<StatsRow, AppError>;

    /// Same as [`VoterRepository::stats`] plus the average age.
    async fn stats_with_average_age(&self) -> Result<StatsRow, AppError>;

    /// Counts grouped by ethnicity code, largest group first.
    async fn race_breakdown(&self) -> Result<Vec<BucketRow>, AppError>;

    /// Counts grouped by gender code, largest group first.
    async fn gender_breakdown(&self) -> Result<Vec<BucketRow>, AppError>;

    /// Counts grouped by age band, youngest band first.
    async fn age_breakdown(&self) -> Result<Vec<BucketRow>, AppError>;

    /// The `limit` most populous states, largest first.
    async fn top_states(&self, limit: i64) -> Result<Vec<StateCountRow>, AppError>;

    /// One page of individual records, highest identifier first.
    async fn list_voters(&self, offset: i64, limit: i64) -> Result<Vec<VoterRow>, AppError>;

    /// Round-trips a trivial statement to verify connectivity.
    async fn ping(&self) -> Result<(), AppError>;
}
