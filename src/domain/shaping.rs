//! Turns raw rows into view models.
//!
//! Everything here is pure and total: a row the engine returned never makes
//! shaping fail. Missing or non-finite numbers collapse to zero (or stay
//! `None` for nullable fields), missing codes collapse to [`UNKNOWN_CODE`],
//! and ordering is left exactly as the engine produced it.

use crate::domain::repositories::{BucketRow, StateCountRow, StatsRow, VoterRow};
use crate::domain::views::{
    AggregateStats, BreakdownBucket, ListingRow, OverviewStats, TopStateEntry,
};

/// Canonical code for empty or missing categories.
pub const UNKNOWN_CODE: &str = "UNKNOWN";

const UNKNOWN_LABEL: &str = "Unknown";

/// Maximum number of records on one listing page.
pub const LISTING_PAGE_SIZE: usize = 25;

/// Maximum number of entries in the top-states table.
pub const TOP_STATES_LIMIT: usize = 5;

/// Categorical dimensions with a static label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Race,
    Gender,
    AgeBand,
}

impl Dimension {
    /// Display label for an already normalized code.
    ///
    /// Codes missing from the table get the label of [`UNKNOWN_CODE`].
    pub fn label(self, code: &str) -> &'static str {
        match self {
            Dimension::Race => match code {
                "M" => "Melayu",
                "C" => "Cina",
                "I" => "India",
                "L" => "Lain-Lain",
                "Q" => "Sarawak",
                "S" => "Sabah",
                "A" => "Asli",
                _ => UNKNOWN_LABEL,
            },
            Dimension::Gender => match code {
                "L" => "Lelaki",
                "P" => "Perempuan",
                _ => UNKNOWN_LABEL,
            },
            Dimension::AgeBand => match code {
                "18-20" => "18-20",
                "21-29" => "21-29",
                "30-39" => "30-39",
                "40-49" => "40-49",
                "50-59" => "50-59",
                "60-69" => "60-69",
                "70+" => "70+",
                _ => UNKNOWN_LABEL,
            },
        }
    }
}

/// Zero-default coercion for counts.
pub fn to_count(value: Option<i64>) -> i64 {
    value.unwrap_or(0)
}

/// Coercion for nullable averages: stays `None` unless the value is finite.
pub fn to_average(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Trims and upper-cases a code; empty or missing becomes [`UNKNOWN_CODE`].
pub fn normalize_code(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_uppercase(),
        _ => UNKNOWN_CODE.to_string(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn shape_stats(row: &StatsRow) -> AggregateStats {
    AggregateStats {
        total: to_count(row.total),
        voters_pru15: to_count(row.voters_pru15),
        voters_prn15: to_count(row.voters_prn15),
    }
}

pub fn shape_overview_stats(row: &StatsRow) -> OverviewStats {
    OverviewStats {
        totals: shape_stats(row),
        average_age: to_average(row.average_age),
    }
}

/// Labels every group and drops the ones whose counts are all zero.
pub fn shape_breakdown(rows: Vec<BucketRow>, dimension: Dimension) -> Vec<BreakdownBucket> {
    rows.into_iter()
        .map(|row| {
            let code = normalize_code(row.code.as_deref());
            BreakdownBucket {
                label: dimension.label(&code),
                code,
                total: to_count(row.total),
                pru15: to_count(row.pru15),
                prn15: to_count(row.prn15),
            }
        })
        .filter(|bucket| !bucket.is_empty())
        .collect()
}

pub fn shape_listing(rows: Vec<VoterRow>) -> Vec<ListingRow> {
    rows.into_iter()
        .take(LISTING_PAGE_SIZE)
        .map(|row| {
            let race = normalize_code(row.race.as_deref());
            let gender = normalize_code(row.gender.as_deref());
            ListingRow {
                id: row.id,
                name: non_blank(row.name),
                age: row.age,
                state: non_blank(row.state),
                parliament: non_blank(row.parliament),
                dun: non_blank(row.dun),
                race_label: Dimension::Race.label(&race),
                race,
                gender_label: Dimension::Gender.label(&gender),
                gender,
            }
        })
        .collect()
}

pub fn shape_top_states(rows: Vec<StateCountRow>) -> Vec<TopStateEntry> {
    rows.into_iter()
        .take(TOP_STATES_LIMIT)
        .map(|row| TopStateEntry {
            state: normalize_code(row.state.as_deref()),
            total: to_count(row.total),
        })
        .collect()
}
