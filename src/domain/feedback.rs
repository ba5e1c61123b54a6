// src/domain/feedback.rs

use crate::domain::record::Record;
use crate::domain::rollups::ID_FIELD;
use crate::domain::window::parse_sheet_date;

pub const SUBMITTED_AT_FIELD: &str = "submitted_at";

/// Most recent feedback for `mls_id`, newest first, at most `limit` rows.
///
/// Rows whose timestamp does not parse sort after every dated row. The sort
/// is stable, so equal timestamps keep sheet order.
pub fn recent_feedback(records: &[Record], mls_id: &str, limit: usize) -> Vec<Record> {
    let mut matching: Vec<_> = records
        .iter()
        .filter(|r| r.matches_id(ID_FIELD, mls_id))
        .map(|r| (parse_sheet_date(r.text(SUBMITTED_AT_FIELD)), r))
        .collect();

    // `None < Some(_)`, so comparing b to a puts undated rows last.
    matching.sort_by(|(a, _), (b, _)| b.cmp(a));

    matching
        .into_iter()
        .take(limit)
        .map(|(_, r)| r.clone())
        .collect()
}
