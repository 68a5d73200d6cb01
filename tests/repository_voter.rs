mod common;

use sqlx::MySqlPool;
use std::sync::Arc;

use dpi_dashboard::application::services::DashboardService;
use dpi_dashboard::config::DatabaseConfig;
use dpi_dashboard::domain::repositories::{BucketRow, VoterRepository};
use dpi_dashboard::infrastructure::database::ConnectionProvider;
use dpi_dashboard::infrastructure::persistence::MySqlVoterRepository;

use common::{SeedVoter, create_voter_table, insert_voters};

fn repository(pool: &MySqlPool) -> MySqlVoterRepository {
    let config = DatabaseConfig {
        host: "localhost".to_string(),
        port: 3306,
        user: "test".to_string(),
        password: "test".to_string(),
        database: "dpi_test".to_string(),
    };

    MySqlVoterRepository::new(Arc::new(ConnectionProvider::with_pool(
        config,
        pool.clone(),
    )))
}

fn voter(race: Option<&'static str>, pru15: i32, prn15: i32) -> SeedVoter {
    SeedVoter {
        race,
        pru15: Some(pru15),
        prn15: Some(prn15),
        ..SeedVoter::default()
    }
}

fn row(code: &str, total: i64, pru15: i64, prn15: i64) -> BucketRow {
    BucketRow {
        code: Some(code.to_string()),
        total: Some(total),
        pru15: Some(pru15),
        prn15: Some(prn15),
    }
}

#[sqlx::test(migrations = false)]
async fn test_single_race_registered_for_pru15_only(pool: MySqlPool) {
    create_voter_table(&pool).await;
    insert_voters(&pool, &vec![voter(Some("M"), 2, 1); 4]).await;
    let repo = repository(&pool);

    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.total, Some(4));
    assert_eq!(stats.voters_pru15, Some(4));
    assert_eq!(stats.voters_prn15, Some(0));

    let races = repo.race_breakdown().await.unwrap();
    assert_eq!(races, vec![row("M", 4, 4, 0)]);

    let view = DashboardService::new(Arc::new(repo)).landing().await.unwrap();
    assert_eq!(view.race_breakdown.len(), 1);
    assert_eq!(view.race_breakdown[0].label, "Melayu");
}

#[sqlx::test(migrations = false)]
async fn test_empty_table(pool: MySqlPool) {
    create_voter_table(&pool).await;
    let repo = repository(&pool);

    let stats = repo.stats_with_average_age().await.unwrap();
    assert_eq!(stats.total, Some(0));
    assert_eq!(stats.voters_pru15, None);
    assert_eq!(stats.average_age, None);

    assert!(repo.race_breakdown().await.unwrap().is_empty());
    assert!(repo.top_states(5).await.unwrap().is_empty());
    assert!(repo.list_voters(0, 25).await.unwrap().is_empty());

    let view = DashboardService::new(Arc::new(repo)).landing().await.unwrap();
    assert_eq!(view.stats.total, 0);
    assert_eq!(view.stats.voters_pru15, 0);
    assert_eq!(view.stats.voters_prn15, 0);
    assert!(view.race_breakdown.is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_blank_race_codes_share_unknown_bucket(pool: MySqlPool) {
    create_voter_table(&pool).await;
    insert_voters(
        &pool,
        &[
            voter(Some(""), 2, 2),
            voter(Some("   "), 2, 0),
            voter(None, 0, 2),
            voter(Some("m"), 2, 2),
            voter(Some(" M "), 0, 0),
        ],
    )
    .await;
    let repo = repository(&pool);

    let races = repo.race_breakdown().await.unwrap();

    assert_eq!(races, vec![row("UNKNOWN", 3, 2, 2), row("M", 2, 1, 1)]);
}

#[sqlx::test(migrations = false)]
async fn test_top_states_applies_limit(pool: MySqlPool) {
    create_voter_table(&pool).await;
    let states = [
        ("Johor", 6),
        ("Selangor", 5),
        ("Perak", 4),
        ("Kedah", 3),
        ("Sabah", 2),
        ("Melaka", 1),
    ];
    let seeds: Vec<SeedVoter> = states
        .iter()
        .flat_map(|&(state, count)| {
            std::iter::repeat_n(
                SeedVoter {
                    state: Some(state),
                    ..SeedVoter::default()
                },
                count,
            )
        })
        .collect();
    insert_voters(&pool, &seeds).await;
    let repo = repository(&pool);

    let top = repo.top_states(5).await.unwrap();

    let names: Vec<_> = top.iter().filter_map(|entry| entry.state.as_deref()).collect();
    assert_eq!(names, vec!["JOHOR", "SELANGOR", "PERAK", "KEDAH", "SABAH"]);
    assert_eq!(top[0].total, Some(6));
    assert_eq!(top[4].total, Some(2));
}

#[sqlx::test(migrations = false)]
async fn test_listing_pages_newest_first(pool: MySqlPool) {
    create_voter_table(&pool).await;
    insert_voters(&pool, &vec![voter(Some("C"), 2, 2); 30]).await;
    let repo = repository(&pool);

    let first: Vec<i64> = repo
        .list_voters(0, 25)
        .await
        .unwrap()
        .iter()
        .map(|row| row.id)
        .collect();
    assert_eq!(first, (6..=30).rev().collect::<Vec<_>>());

    let second: Vec<i64> = repo
        .list_voters(25, 25)
        .await
        .unwrap()
        .iter()
        .map(|row| row.id)
        .collect();
    assert_eq!(second, vec![5, 4, 3, 2, 1]);

    let view = DashboardService::new(Arc::new(repo)).voters(2).await.unwrap();
    assert_eq!(view.pagination.total_items, 30);
    assert_eq!(view.pagination.total_pages, 2);
    assert_eq!(view.voters.len(), 5);
    assert_eq!(view.voters[0].race_label, "Cina");
}

#[sqlx::test(migrations = false)]
async fn test_age_bands_exclude_minors(pool: MySqlPool) {
    create_voter_table(&pool).await;
    let ages = [Some(16), None, Some(19), Some(25), Some(72), Some(18)];
    let seeds: Vec<SeedVoter> = ages
        .iter()
        .map(|&age| SeedVoter {
            age,
            ..SeedVoter::default()
        })
        .collect();
    insert_voters(&pool, &seeds).await;
    let repo = repository(&pool);

    let bands = repo.age_breakdown().await.unwrap();

    let codes: Vec<_> = bands.iter().filter_map(|band| band.code.as_deref()).collect();
    assert_eq!(codes, vec!["18-20", "21-29", "70+", "UNKNOWN"]);
    assert_eq!(bands[0].total, Some(2));
    assert_eq!(bands[3].total, Some(2));
}

#[sqlx::test(migrations = false)]
async fn test_average_age_ignores_missing_ages(pool: MySqlPool) {
    create_voter_table(&pool).await;
    let seeds: Vec<SeedVoter> = [Some(30), Some(40), None]
        .iter()
        .map(|&age| SeedVoter {
            age,
            ..SeedVoter::default()
        })
        .collect();
    insert_voters(&pool, &seeds).await;
    let repo = repository(&pool);

    let stats = repo.stats_with_average_age().await.unwrap();

    assert_eq!(stats.total, Some(3));
    assert_eq!(stats.average_age, Some(35.0));
    assert!(repo.ping().await.is_ok());
}
