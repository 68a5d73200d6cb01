#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::ServiceExt;
use axum::extract::Request;
use axum::routing::IntoMakeService;
use sqlx::MySqlPool;
use tower_http::normalize_path::NormalizePath;
use dpi_dashboard::AppError;
use dpi_dashboard::domain::repositories::{
    BucketRow, StateCountRow, StatsRow, VoterRepository, VoterRow,
};
use dpi_dashboard::state::AppState;

/// Which dataset the stub should fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    Stats,
    Races,
    Genders,
    Ages,
    States,
    Listing,
    Ping,
}

/// In-memory stand-in for the MySQL repository.
///
/// Holds already-aggregated rows, the way the engine would return them.
pub struct StubVoterRepository {
    pub stats: StatsRow,
    pub races: Vec<BucketRow>,
    pub genders: Vec<BucketRow>,
    pub ages: Vec<BucketRow>,
    pub states: Vec<StateCountRow>,
    pub voters: Vec<VoterRow>,
    pub fail_on: FailOn,
    pub calls: AtomicUsize,
}

impl Default for StubVoterRepository {
    fn default() -> Self {
        Self {
            stats: StatsRow {
                total: Some(0),
                ..StatsRow::default()
            },
            races: vec![],
            genders: vec![],
            ages: vec![],
            states: vec![],
            voters: vec![],
            fail_on: FailOn::Nothing,
            calls: AtomicUsize::new(0),
        }
    }
}

impl StubVoterRepository {
    fn check(&self, dataset: FailOn) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == dataset {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl VoterRepository for StubVoterRepository {
    async fn stats(&self) -> Result<StatsRow, AppError> {
        self.check(FailOn::Stats)?;
        Ok(StatsRow {
            average_age: None,
            ..self.stats.clone()
        })
    }

    async fn stats_with_average_age(&self) -> Result<StatsRow, AppError> {
        self.check(FailOn::Stats)?;
        Ok(self.stats.clone())
    }

    async fn race_breakdown(&self) -> Result<Vec<BucketRow>, AppError> {
        self.check(FailOn::Races)?;
        Ok(self.races.clone())
    }

    async fn gender_breakdown(&self) -> Result<Vec<BucketRow>, AppError> {
        self.check(FailOn::Genders)?;
        Ok(self.genders.clone())
    }

    async fn age_breakdown(&self) -> Result<Vec<BucketRow>, AppError> {
        self.check(FailOn::Ages)?;
        Ok(self.ages.clone())
    }

    async fn top_states(&self, limit: i64) -> Result<Vec<StateCountRow>, AppError> {
        self.check(FailOn::States)?;
        Ok(self.states.iter().take(limit as usize).cloned().collect())
    }

    async fn list_voters(&self, offset: i64, limit: i64) -> Result<Vec<VoterRow>, AppError> {
        self.check(FailOn::Listing)?;
        Ok(self
            .voters
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check(FailOn::Ping)
    }
}

pub fn bucket(code: &str, total: i64, pru15: i64, prn15: i64) -> BucketRow {
    BucketRow {
        code: Some(code.to_string()),
        total: Some(total),
        pru15: Some(pru15),
        prn15: Some(prn15),
    }
}

/// `count` voters with descending identifiers, as `ORDER BY id DESC` yields.
pub fn voters(count: i64) -> Vec<VoterRow> {
    (1..=count)
        .rev()
        .map(|id| VoterRow {
            id,
            name: Some(format!("Pengundi {id}")),
            age: Some(30 + id % 40),
            state: Some("Johor".to_string()),
            parliament: Some("P.140".to_string()),
            dun: Some("N.01".to_string()),
            race: Some(if id % 2 == 0 { "M" } else { "c" }.to_string()),
            gender: Some(if id % 3 == 0 { "L" } else { "P" }.to_string()),
        })
        .collect()
}

pub fn create_test_state(repository: Arc<StubVoterRepository>) -> AppState {
    AppState::new(repository)
}

/// The production router, middleware included, over a stub repository.
pub fn create_test_app(
    repository: Arc<StubVoterRepository>,
) -> IntoMakeService<NormalizePath<axum::Router>> {
    let app = dpi_dashboard::routes::app_router(create_test_state(repository));
    ServiceExt::<Request>::into_make_service(app)
}

/// A row to seed into `dpi_202412`.
#[derive(Debug, Clone, Default)]
pub struct SeedVoter {
    pub name: Option<&'static str>,
    pub age: Option<i32>,
    pub state: Option<&'static str>,
    pub race: Option<&'static str>,
    pub gender: Option<&'static str>,
    pub pru15: Option<i32>,
    pub prn15: Option<i32>,
}

pub async fn create_voter_table(pool: &MySqlPool) {
    sqlx::query(
        r#"
        CREATE TABLE dpi_202412 (
            id INT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            Nama VARCHAR(255) NULL,
            Umur INT NULL,
            Negeri VARCHAR(64) NULL,
            Parlimen VARCHAR(16) NULL,
            DUN VARCHAR(16) NULL,
            Kaum2 VARCHAR(16) NULL,
            Jantina VARCHAR(16) NULL,
            voters_pru15 TINYINT NULL,
            voters_prn15 TINYINT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts voters in order, so the first one gets id 1.
pub async fn insert_voters(pool: &MySqlPool, voters: &[SeedVoter]) {
    for voter in voters {
        sqlx::query(
            r#"
            INSERT INTO dpi_202412
                (Nama, Umur, Negeri, Parlimen, DUN, Kaum2, Jantina, voters_pru15, voters_prn15)
            VALUES (?, ?, ?, 'P.140', 'N.01', ?, ?, ?, ?)
            "#,
        )
        .bind(voter.name)
        .bind(voter.age)
        .bind(voter.state)
        .bind(voter.race)
        .bind(voter.gender)
        .bind(voter.pru15)
        .bind(voter.prn15)
        .execute(pool)
        .await
        .unwrap();
    }
}
