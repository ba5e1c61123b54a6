// src/sheets/client.rs
use crate::sheets::auth::ServiceAccountKey;
use crate::sheets::{Grid, SheetsError, TableSource};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Read-only Google Sheets v4 client for one spreadsheet.
pub struct SheetsClient {
    client: Client,
    sheet_id: String,
    key: ServiceAccountKey,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl SheetsClient {
    pub fn new(sheet_id: String, key_file: &str) -> Result<Self, SheetsError> {
        let key = ServiceAccountKey::from_file(key_file)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SheetsError::Network(e.to_string()))?;

        Ok(Self {
            client,
            sheet_id,
            key,
        })
    }

    fn values_url(&self, range: &str) -> Result<Url, SheetsError> {
        let mut url = Url::parse(BASE_URL).map_err(|e| SheetsError::Config(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Config("base URL cannot take path segments".into()))?
            .push(&self.sheet_id)
            .push("values")
            .push(range);
        Ok(url)
    }
}

impl TableSource for SheetsClient {
    fn read_range(&self, range: &str) -> Result<Grid, SheetsError> {
        let token = self.key.access_token(&self.client)?;
        let url = self.values_url(range)?;

        let resp = self.client.get(url).bearer_auth(token).send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: ValueRange = resp.json()?;
        let grid: Grid = body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();

        tracing::debug!(range, rows = grid.len(), "Read sheet range");
        Ok(grid)
    }
}

/// Formatted values come back as strings; anything else is rendered as text.
fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
