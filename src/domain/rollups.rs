// src/domain/rollups.rs

use crate::domain::numbers::{count, round2, safe_div, serialize_number, serialize_opt_number};
use crate::domain::record::Record;
use crate::domain::window::DateWindow;
use serde::Serialize;

pub const ID_FIELD: &str = "mls_id";
pub const DATE_FIELD: &str = "date";

/// Rows for `mls_id` whose `date` falls inside `window`.
pub fn rows_in_window<'a>(
    records: &'a [Record],
    mls_id: &'a str,
    window: &'a DateWindow,
) -> impl Iterator<Item = &'a Record> + 'a {
    records.iter().filter(move |r| {
        r.matches_id(ID_FIELD, mls_id) && window.classify(r.text(DATE_FIELD)).is_included()
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricsRollup {
    #[serde(serialize_with = "serialize_number")]
    pub page_views_30d: f64,
    #[serde(serialize_with = "serialize_number")]
    pub unique_users_30d: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ShowingsRollup {
    #[serde(serialize_with = "serialize_number")]
    pub scheduled_30d: f64,
    #[serde(serialize_with = "serialize_number")]
    pub completed_30d: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AdsRollup {
    #[serde(serialize_with = "serialize_number")]
    pub impressions_30d: f64,
    #[serde(serialize_with = "serialize_number")]
    pub clicks_30d: f64,
    #[serde(serialize_with = "serialize_number")]
    pub cost_30d_usd: f64,
    #[serde(serialize_with = "serialize_opt_number")]
    pub cpc_30d_usd: Option<f64>,
}

/// Typed view of one `Metrics_Daily` row.
#[derive(Debug, Clone, Copy)]
struct MetricDay {
    page_views: f64,
    unique_users: f64,
}

impl From<&Record> for MetricDay {
    fn from(r: &Record) -> Self {
        Self {
            page_views: count(r.text("page_views")),
            unique_users: count(r.text("unique_users")),
        }
    }
}

/// Typed view of one `Showings_Daily` row.
#[derive(Debug, Clone, Copy)]
struct ShowingDay {
    scheduled: f64,
    completed: f64,
}

impl From<&Record> for ShowingDay {
    fn from(r: &Record) -> Self {
        Self {
            scheduled: count(r.text("scheduled")),
            completed: count(r.text("completed")),
        }
    }
}

/// Typed view of one `Ads_Daily` row.
#[derive(Debug, Clone, Copy)]
struct AdDay {
    impressions: f64,
    clicks: f64,
    cost: f64,
}

impl From<&Record> for AdDay {
    fn from(r: &Record) -> Self {
        Self {
            impressions: count(r.text("impressions")),
            clicks: count(r.text("clicks")),
            // Sheets in the wild use either column name.
            cost: count(r.text_any(&["cost_usd", "cost"])),
        }
    }
}

pub fn metrics_30d(records: &[Record], mls_id: &str, window: &DateWindow) -> MetricsRollup {
    rows_in_window(records, mls_id, window)
        .map(MetricDay::from)
        .fold(MetricsRollup::default(), |mut acc, day| {
            acc.page_views_30d += day.page_views;
            acc.unique_users_30d += day.unique_users;
            acc
        })
}

pub fn showings_30d(records: &[Record], mls_id: &str, window: &DateWindow) -> ShowingsRollup {
    rows_in_window(records, mls_id, window)
        .map(ShowingDay::from)
        .fold(ShowingsRollup::default(), |mut acc, day| {
            acc.scheduled_30d += day.scheduled;
            acc.completed_30d += day.completed;
            acc
        })
}

pub fn ads_30d(records: &[Record], mls_id: &str, window: &DateWindow) -> AdsRollup {
    let (impressions, clicks, cost) = rows_in_window(records, mls_id, window)
        .map(AdDay::from)
        .fold((0.0, 0.0, 0.0), |(i, c, s), day| {
            (i + day.impressions, c + day.clicks, s + day.cost)
        });

    let cost = round2(cost);
    AdsRollup {
        impressions_30d: impressions,
        clicks_30d: clicks,
        cost_30d_usd: cost,
        cpc_30d_usd: safe_div(cost, clicks).map(round2),
    }
}

impl AdsRollup {
    /// Stand-in when the ads tab is missing or unreadable.
    pub fn zero() -> Self {
        Self::default()
    }
}
