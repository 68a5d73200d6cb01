//! MySQL implementation of the voter repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::repositories::{BucketRow, StateCountRow, StatsRow, VoterRepository, VoterRow};
use crate::error::AppError;
use crate::infrastructure::database::ConnectionProvider;

const STATS_SQL: &str = r#"
    SELECT COUNT(*) AS total,
        CAST(SUM(CASE WHEN voters_pru15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS voters_pru15,
        CAST(SUM(CASE WHEN voters_prn15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS voters_prn15
    FROM dpi_202412
"#;

const STATS_WITH_AGE_SQL: &str = r#"
    SELECT COUNT(*) AS total,
        CAST(SUM(CASE WHEN voters_pru15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS voters_pru15,
        CAST(SUM(CASE WHEN voters_prn15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS voters_prn15,
        CAST(AVG(Umur) AS DOUBLE) AS average_age
    FROM dpi_202412
"#;

const RACE_BREAKDOWN_SQL: &str = r#"
    SELECT UPPER(COALESCE(NULLIF(TRIM(Kaum2), ''), 'UNKNOWN')) AS code,
        COUNT(*) AS total,
        CAST(SUM(CASE WHEN voters_pru15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS pru15,
        CAST(SUM(CASE WHEN voters_prn15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS prn15
    FROM dpi_202412
    GROUP BY code
    ORDER BY total DESC
"#;

const GENDER_BREAKDOWN_SQL: &str = r#"
    SELECT UPPER(COALESCE(NULLIF(TRIM(Jantina), ''), 'UNKNOWN')) AS code,
        COUNT(*) AS total,
        CAST(SUM(CASE WHEN voters_pru15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS pru15,
        CAST(SUM(CASE WHEN voters_prn15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS prn15
    FROM dpi_202412
    GROUP BY code
    ORDER BY total DESC
"#;

const AGE_BREAKDOWN_SQL: &str = r#"
    SELECT CASE
            WHEN Umur IS NULL OR Umur < 18 THEN 'UNKNOWN'
            WHEN Umur <= 20 THEN '18-20'
            WHEN Umur <= 29 THEN '21-29'
            WHEN Umur <= 39 THEN '30-39'
            WHEN Umur <= 49 THEN '40-49'
            WHEN Umur <= 59 THEN '50-59'
            WHEN Umur <= 69 THEN '60-69'
            ELSE '70+'
        END AS code,
        COUNT(*) AS total,
        CAST(SUM(CASE WHEN voters_pru15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS pru15,
        CAST(SUM(CASE WHEN voters_prn15 = 2 THEN 1 ELSE 0 END) AS SIGNED) AS prn15
    FROM dpi_202412
    GROUP BY code
    ORDER BY MIN(CASE WHEN Umur IS NULL OR Umur < 18 THEN 999 ELSE Umur END)
"#;

const TOP_STATES_SQL: &str = r#"
    SELECT UPPER(COALESCE(NULLIF(TRIM(Negeri), ''), 'UNKNOWN')) AS state,
        COUNT(*) AS total
    FROM dpi_202412
    GROUP BY state
    ORDER BY total DESC
    LIMIT ?
"#;

const LIST_VOTERS_SQL: &str = r#"
    SELECT CAST(id AS SIGNED) AS id,
        Nama AS name,
        CAST(Umur AS SIGNED) AS age,
        Negeri AS state,
        Parlimen AS parliament,
        DUN AS dun,
        Kaum2 AS race,
        Jantina AS gender
    FROM dpi_202412
    ORDER BY id DESC
    LIMIT ? OFFSET ?
"#;

/// MySQL repository for the `dpi_202412` table.
///
/// Every method issues exactly one read-only statement through the shared
/// [`ConnectionProvider`].
pub struct MySqlVoterRepository {
    provider: Arc<ConnectionProvider>,
}

impl MySqlVoterRepository {
    /// Creates a new repository on top of the shared connection provider.
    pub fn new(provider: Arc<ConnectionProvider>) -> Self {
        Self { provider }
    }

    async fn single_stats_row(&self, sql: &str) -> Result<StatsRow, AppError> {
        let rows: Vec<StatsRow> = self.provider.query(sql, &[]).await?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }
}

#[async_trait]
impl VoterRepository for MySqlVoterRepository {
    async fn stats(&self) -> Result<StatsRow, AppError> {
        self.single_stats_row(STATS_SQL).await
    }

    async fn stats_with_average_age(&self) -> Result<StatsRow, AppError> {
        self.single_stats_row(STATS_WITH_AGE_SQL).await
    }

    async fn race_breakdown(&self) -> Result<Vec<BucketRow>, AppError> {
        Ok(self.provider.query(RACE_BREAKDOWN_SQL, &[]).await?)
    }

    async fn gender_breakdown(&self) -> Result<Vec<BucketRow>, AppError> {
        Ok(self.provider.query(GENDER_BREAKDOWN_SQL, &[]).await?)
    }

    async fn age_breakdown(&self) -> Result<Vec<BucketRow>, AppError> {
        Ok(self.provider.query(AGE_BREAKDOWN_SQL, &[]).await?)
    }

    async fn top_states(&self, limit: i64) -> Result<Vec<StateCountRow>, AppError> {
        Ok(self.provider.query(TOP_STATES_SQL, &[limit]).await?)
    }

    async fn list_voters(&self, offset: i64, limit: i64) -> Result<Vec<VoterRow>, AppError> {
        Ok(self.provider.query(LIST_VOTERS_SQL, &[limit, offset]).await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.provider.pool())
            .await?;

        Ok(())
    }
}
