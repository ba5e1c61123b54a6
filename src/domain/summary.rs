// src/domain/summary.rs

use crate::domain::listing::Listing;
use crate::domain::numbers::{serialize_number, serialize_opt_number};
use crate::domain::record::Record;
use crate::domain::rollups::{AdsRollup, MetricsRollup, ShowingsRollup};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

pub const SOURCE: &str = "Google Sheet";
pub const CURRENCY: &str = "USD";
pub const PERIOD_30D: &str = "30d";

/// Seller-facing summary of one listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    pub listing_id: String,
    pub address: Option<String>,
    #[serde(rename = "photo_url")]
    pub photo_url: Option<String>,
    #[serde(rename = "mls_url")]
    pub mls_url: Option<String>,
    pub status: Sourced<StatusValue>,
    pub price: Sourced<Price>,
    pub market_days: Sourced<MarketDays>,
    pub open_house_next: Sourced<OpenHouse>,
    pub kpis: Vec<Kpi>,
    pub marketing: Marketing,
    pub feedback: Vec<Record>,
}

/// A block tagged with where it came from and when the response was built.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sourced<T> {
    #[serde(flatten)]
    pub value: T,
    pub source: &'static str,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusValue {
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Price {
    #[serde(serialize_with = "serialize_opt_number")]
    pub current: Option<f64>,
    #[serde(serialize_with = "serialize_opt_number")]
    pub original: Option<f64>,
    pub currency: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketDays {
    #[serde(serialize_with = "serialize_opt_number")]
    pub dom: Option<f64>,
    #[serde(serialize_with = "serialize_opt_number")]
    pub cdom: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenHouse {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,
    pub period: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marketing {
    #[serde(flatten)]
    pub ads: AdsRollup,
    pub source: &'static str,
}

/// Everything the assembler needs, already read and rolled up.
#[derive(Debug, Clone)]
pub struct SummaryInputs {
    /// Id as requested, echoed back verbatim.
    pub listing_id: String,
    pub listing: Listing,
    pub metrics: MetricsRollup,
    pub showings: ShowingsRollup,
    pub ads: AdsRollup,
    pub feedback: Vec<Record>,
}

fn kpi(key: &'static str, label: &'static str, value: f64) -> Kpi {
    Kpi {
        key,
        label,
        value,
        period: PERIOD_30D,
        source: SOURCE,
    }
}

/// JavaScript-style ISO timestamp (`2025-06-30T12:00:00.000Z`).
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn sourced<T>(value: T, updated_at: &str) -> Sourced<T> {
    Sourced {
        value,
        source: SOURCE,
        updated_at: updated_at.to_string(),
    }
}

impl ListingSummary {
    /// Build the response. `generated_at` stamps every block.
    pub fn assemble(inputs: SummaryInputs, generated_at: DateTime<Utc>) -> Self {
        let updated_at = iso_timestamp(generated_at);
        let SummaryInputs {
            listing_id,
            listing,
            metrics,
            showings,
            ads,
            feedback,
        } = inputs;

        let kpis = vec![
            kpi("page_views", "Listing Views", metrics.page_views_30d),
            kpi("unique_users", "Unique Visitors", metrics.unique_users_30d),
            kpi("showings_sched", "Showings Scheduled", showings.scheduled_30d),
            kpi("showings_completed", "Showings Completed", showings.completed_30d),
            kpi("ad_impressions", "Ad Impressions", ads.impressions_30d),
            kpi("ad_clicks", "Ad Clicks", ads.clicks_30d),
        ];

        Self {
            listing_id,
            address: listing.address,
            photo_url: listing.photo_url,
            mls_url: listing.mls_url,
            status: sourced(
                StatusValue {
                    value: listing.status.unwrap_or_else(|| "-".to_string()),
                },
                &updated_at,
            ),
            price: sourced(
                Price {
                    current: listing.list_price,
                    original: listing.original_list_price,
                    currency: CURRENCY,
                },
                &updated_at,
            ),
            market_days: sourced(
                MarketDays {
                    dom: listing.dom,
                    cdom: listing.cdom,
                },
                &updated_at,
            ),
            open_house_next: sourced(
                OpenHouse {
                    start: listing.open_house_start,
                    end: listing.open_house_end,
                },
                &updated_at,
            ),
            kpis,
            marketing: Marketing {
                ads,
                source: SOURCE,
            },
            feedback,
        }
    }
}
