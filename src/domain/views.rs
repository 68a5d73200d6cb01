//! View models delivered to the presentation layer.
//!
//! These are plain data with no identity beyond a single response. Field
//! names serialize in camelCase.

use serde::Serialize;

/// Row count and per-election registration totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total: i64,
    pub voters_pru15: i64,
    pub voters_prn15: i64,
}

/// [`AggregateStats`] with the average age, `null` when the table has no ages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    #[serde(flatten)]
    pub totals: AggregateStats,
    pub average_age: Option<f64>,
}

/// A single category of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownBucket {
    pub code: String,
    pub label: &'static str,
    pub total: i64,
    pub pru15: i64,
    pub prn15: i64,
}

impl BreakdownBucket {
    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.pru15 == 0 && self.prn15 == 0
    }
}

/// One individual record of the voter listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRow {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub state: Option<String>,
    pub parliament: Option<String>,
    pub dun: Option<String>,
    pub race: String,
    pub race_label: &'static str,
    pub gender: String,
    pub gender_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopStateEntry {
    pub state: String,
    pub total: i64,
}

/// Pagination metadata for the voter listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let size = i64::from(page_size.max(1));
        let total_pages = (total_items.max(0) + size - 1) / size;

        Self {
            page,
            page_size,
            total_items,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }
}

/// Landing page: headline totals and the race breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub stats: AggregateStats,
    pub race_breakdown: Vec<BreakdownBucket>,
}

/// Overview page: every breakdown plus the most populous states.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub stats: OverviewStats,
    pub race_breakdown: Vec<BreakdownBucket>,
    pub gender_breakdown: Vec<BreakdownBucket>,
    pub age_breakdown: Vec<BreakdownBucket>,
    pub top_states: Vec<TopStateEntry>,
}

/// Detail page: totals and one page of individual records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterListView {
    pub stats: AggregateStats,
    pub pagination: PaginationMeta,
    pub voters: Vec<ListingRow>,
}
