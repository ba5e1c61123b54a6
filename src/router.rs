use crate::errors::ServerError;
use crate::responses::{html_response, json_response, json_response_with_status, ResultResp};
use crate::service::DashboardService;
use crate::sheets::{Table, TableSource};
use crate::templates;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;

pub fn handle<S: TableSource>(req: Request, svc: &DashboardService<S>) -> ResultResp {
    if req.method().as_str() != "GET" {
        return Err(ServerError::NotFound("Not Found".into()));
    }

    let path = req.uri().path().trim_end_matches('/');
    let decoded = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            urlencoding::decode(s)
                .map_err(|_| ServerError::BadRequest(format!("path segment {s:?} is not UTF-8")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let segments: Vec<&str> = decoded.iter().map(|s| s.as_ref()).collect();

    match segments.as_slice() {
        [] => html_response(templates::pages::home_page()),
        ["health", "sheets"] => sheets_health(svc),
        ["api", "listings", id, "summary"] => json_response(&svc.summary(id)?),
        ["debug", "listings", id] => json_response(&svc.listing_record(id)?),
        ["debug", table, "raw"] => json_response(&svc.raw_table(table_from_slug(table)?)?),
        ["debug", table, "window"] => {
            let params = parse_query(&req);
            let days = match params.get("days") {
                Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                    ServerError::BadRequest(format!("days must be a whole number, got {raw:?}"))
                })?),
                None => None,
            };
            let mls_id = params.get("mls_id").map(String::as_str).filter(|s| !s.is_empty());
            json_response(&svc.windowed_table(table_from_slug(table)?, mls_id, days)?)
        }
        _ => Err(ServerError::NotFound("Not Found".into())),
    }
}

fn sheets_health<S: TableSource>(svc: &DashboardService<S>) -> ResultResp {
    match svc.health() {
        Ok(header) => json_response(&json!({
            "ok": true,
            "sheetId": svc.settings().sheet_id,
            "header": header,
        })),
        Err(e) => {
            tracing::error!(error = %e, "Sheet health check failed");
            json_response_with_status(500, &json!({ "ok": false, "error": e.to_string() }))
        }
    }
}

fn table_from_slug(slug: &str) -> Result<Table, ServerError> {
    Table::from_slug(slug).ok_or_else(|| ServerError::NotFound(format!("Unknown table {slug:?}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
