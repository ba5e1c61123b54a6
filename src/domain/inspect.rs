// src/domain/inspect.rs
// Diagnostic views of the raw tables, used by the /debug routes.

use crate::domain::record::{header_of, rows_by_header, Record};
use crate::domain::rollups::{DATE_FIELD, ID_FIELD};
use crate::domain::summary::iso_timestamp;
use crate::domain::window::{DateWindow, WindowClass};
use crate::sheets::Table;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTableView {
    pub table: &'static str,
    pub range: &'static str,
    pub header: Vec<String>,
    pub row_count: usize,
    pub rows: Vec<Record>,
}

impl RawTableView {
    pub fn new(table: Table, grid: &[Vec<String>]) -> Self {
        let rows = rows_by_header(grid);
        Self {
            table: table.tab(),
            range: table.range(),
            header: header_of(grid),
            row_count: rows.len(),
            rows,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClassifiedRow {
    pub status: &'static str,
    pub reason: Option<&'static str>,
    pub row: Record,
}

impl ClassifiedRow {
    fn new(class: WindowClass, row: Record) -> Self {
        Self {
            status: if class.is_included() { "included" } else { "excluded" },
            reason: class.reason(),
            row,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowedTableView {
    pub table: &'static str,
    pub mls_id: Option<String>,
    pub days: i64,
    pub now: String,
    pub since: String,
    pub included_count: usize,
    pub excluded_count: usize,
    pub rows: Vec<ClassifiedRow>,
}

impl WindowedTableView {
    /// Every row (optionally only one listing's) tagged with its window verdict.
    pub fn new(
        table: Table,
        grid: &[Vec<String>],
        mls_id: Option<&str>,
        window: &DateWindow,
    ) -> Self {
        let rows: Vec<ClassifiedRow> = rows_by_header(grid)
            .into_iter()
            .filter(|r| mls_id.map_or(true, |id| r.matches_id(ID_FIELD, id)))
            .map(|r| ClassifiedRow::new(window.classify(r.text(DATE_FIELD)), r))
            .collect();

        let included_count = rows.iter().filter(|r| r.reason.is_none()).count();

        Self {
            table: table.tab(),
            mls_id: mls_id.map(str::to_string),
            days: window.days(),
            now: iso_timestamp(window.now()),
            since: iso_timestamp(window.since()),
            included_count,
            excluded_count: rows.len() - included_count,
            rows,
        }
    }
}
