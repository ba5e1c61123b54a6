// src/service.rs
use crate::config::{Config, DEFAULT_FEEDBACK_LIMIT, DEFAULT_WINDOW_DAYS};
use crate::domain::feedback::recent_feedback;
use crate::domain::inspect::{RawTableView, WindowedTableView};
use crate::domain::listing::{find_listing, Listing};
use crate::domain::record::{header_of, rows_by_header, Record};
use crate::domain::rollups::{ads_30d, metrics_30d, showings_30d, AdsRollup};
use crate::domain::summary::{ListingSummary, SummaryInputs};
use crate::domain::window::DateWindow;
use crate::errors::ServerError;
use crate::sheets::{SheetsError, Table, TableSource};
use chrono::{DateTime, Utc};
use std::thread::{self, ScopedJoinHandle};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub sheet_id: String,
    pub feedback_limit: usize,
    pub window_days: i64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            sheet_id: String::new(),
            feedback_limit: DEFAULT_FEEDBACK_LIMIT,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl From<&Config> for ServiceSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            sheet_id: cfg.sheet_id.clone(),
            feedback_limit: cfg.feedback_limit,
            window_days: cfg.window_days,
        }
    }
}

/// Reads the listing sheet on demand and turns it into dashboard views.
/// Holds no state between requests.
pub struct DashboardService<S> {
    source: S,
    settings: ServiceSettings,
}

impl<S: TableSource> DashboardService<S> {
    pub fn new(source: S, settings: ServiceSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    fn read_records(&self, table: Table) -> Result<Vec<Record>, SheetsError> {
        let grid = self.source.read_range(table.range())?;
        let records = rows_by_header(&grid);
        debug!(table = table.tab(), rows = records.len(), "Mapped sheet rows");
        Ok(records)
    }

    /// The raw `Listings` row for `mls_id`.
    pub fn listing_record(&self, mls_id: &str) -> Result<Record, ServerError> {
        let listings = self.read_records(Table::Listings)?;
        find_listing(&listings, mls_id)
            .cloned()
            .ok_or_else(|| ServerError::NotFound("Listing not found in Sheet".to_string()))
    }

    pub fn summary(&self, mls_id: &str) -> Result<ListingSummary, ServerError> {
        self.summary_at(mls_id, Utc::now())
    }

    /// Summary as of `now`. The same instant drives every window and stamps
    /// every block of the response.
    pub fn summary_at(
        &self,
        mls_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ListingSummary, ServerError> {
        let listing = Listing::from(&self.listing_record(mls_id)?);
        let window = DateWindow::new(now, self.settings.window_days)
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        let limit = self.settings.feedback_limit;

        info!(mls_id, row_id = %listing.mls_id, "Building listing summary");

        let (metrics, showings, ads, feedback) = thread::scope(|s| {
            let metrics = s.spawn(|| {
                self.read_records(Table::MetricsDaily)
                    .map(|rows| metrics_30d(&rows, mls_id, &window))
            });
            let showings = s.spawn(|| {
                self.read_records(Table::ShowingsDaily)
                    .map(|rows| showings_30d(&rows, mls_id, &window))
            });
            let ads = s.spawn(|| self.ads_or_zero(mls_id, &window));
            let feedback = s.spawn(|| {
                self.read_records(Table::Feedback)
                    .map(|rows| recent_feedback(&rows, mls_id, limit))
            });

            (
                joined(metrics),
                joined(showings),
                joined(ads),
                joined(feedback),
            )
        });

        let inputs = SummaryInputs {
            listing_id: mls_id.to_string(),
            listing,
            metrics: metrics??,
            showings: showings??,
            ads: ads?,
            feedback: feedback??,
        };

        Ok(ListingSummary::assemble(inputs, now))
    }

    /// Ads rollup, or zeros when the ads tab is missing or unreadable.
    fn ads_or_zero(&self, mls_id: &str, window: &DateWindow) -> AdsRollup {
        match self.read_records(Table::AdsDaily) {
            Ok(rows) => ads_30d(&rows, mls_id, window),
            Err(e) => {
                warn!(mls_id, error = %e, "Ads_Daily unavailable, using zero rollup");
                AdsRollup::zero()
            }
        }
    }

    /// Header row of `Listings`, proving the sheet is reachable.
    pub fn health(&self) -> Result<Vec<String>, SheetsError> {
        let grid = self.source.read_range(Table::Listings.header_range())?;
        Ok(header_of(&grid))
    }

    pub fn raw_table(&self, table: Table) -> Result<RawTableView, ServerError> {
        let grid = self.source.read_range(table.range())?;
        Ok(RawTableView::new(table, &grid))
    }

    pub fn windowed_table(
        &self,
        table: Table,
        mls_id: Option<&str>,
        days: Option<i64>,
    ) -> Result<WindowedTableView, ServerError> {
        if table.date_field().is_none() {
            return Err(ServerError::BadRequest(format!(
                "{} has no date column to window",
                table.tab()
            )));
        }
        let days = days.unwrap_or(self.settings.window_days);
        let window = DateWindow::new(Utc::now(), days)
            .map_err(|e| ServerError::BadRequest(e.to_string()))?;

        let grid = self.source.read_range(table.range())?;
        Ok(WindowedTableView::new(table, &grid, mls_id, &window))
    }
}

fn joined<T>(handle: ScopedJoinHandle<'_, T>) -> Result<T, ServerError> {
    handle
        .join()
        .map_err(|_| ServerError::Internal("sheet read thread panicked".to_string()))
}
