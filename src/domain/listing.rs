// src/domain/listing.rs

use crate::domain::numbers::scalar;
use crate::domain::record::Record;
use crate::domain::rollups::ID_FIELD;

/// First listing whose `mls_id` equals `mls_id`.
pub fn find_listing<'a>(records: &'a [Record], mls_id: &str) -> Option<&'a Record> {
    records.iter().find(|r| r.matches_id(ID_FIELD, mls_id))
}

/// A `Listings` row with its fields named.
///
/// Scalars that are blank in the sheet are `None` ("unknown"), unlike the
/// daily counters which read blanks as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub mls_id: String,
    pub address: Option<String>,
    pub status: Option<String>,
    pub list_price: Option<f64>,
    pub original_list_price: Option<f64>,
    pub dom: Option<f64>,
    pub cdom: Option<f64>,
    pub open_house_start: Option<String>,
    pub open_house_end: Option<String>,
    pub photo_url: Option<String>,
    pub mls_url: Option<String>,
}

impl From<&Record> for Listing {
    fn from(r: &Record) -> Self {
        let text = |key: &str| r.non_empty(key).map(str::to_string);
        Self {
            mls_id: r.text(ID_FIELD).trim().to_string(),
            address: text("address"),
            status: text("status"),
            list_price: scalar(r.text("list_price")),
            original_list_price: scalar(r.text("original_list_price")),
            dom: scalar(r.text("dom")),
            cdom: scalar(r.text("cdom")),
            open_house_start: text("open_house_start"),
            open_house_end: text("open_house_end"),
            photo_url: text("photo_url"),
            mls_url: text("mls_url"),
        }
    }
}
