// src/tests/router_tests/debug_tests.rs

use crate::router::handle;
use crate::sheets::Table;
use crate::tests::utils::{body_json, days_ago, get, service, FakeSheet};

fn metrics_sheet() -> FakeSheet {
    let (d2, d45) = (days_ago(2), days_ago(45));
    FakeSheet::new()
        .with_table(
            Table::MetricsDaily,
            &[
                &["mls_id", "date", "page_views", "unique_users"],
                &["100", d2.as_str(), "10", "5"],
                &["100", d45.as_str(), "8", "4"],
                &["100", "someday", "1", "1"],
                &["200", d2.as_str(), "3", "3"],
            ],
        )
        .with_table(
            Table::Listings,
            &[
                &["mls_id", "address"],
                &["100", "12 Elm St"],
                &["ML 7/B", "7 Birch Rd"],
            ],
        )
}

#[test]
fn raw_view_returns_header_and_records() {
    let svc = service(metrics_sheet());
    let resp = handle(get("/debug/metrics/raw"), &svc).unwrap();
    assert_eq!(resp.status(), 200);
    let v = body_json(resp);

    assert_eq!(v["table"], "Metrics_Daily");
    assert_eq!(v["range"], "Metrics_Daily!A1:D100000");
    assert_eq!(v["rowCount"], 4);
    assert_eq!(v["header"][2], "page_views");
    assert_eq!(v["rows"][1]["page_views"], "8");
}

#[test]
fn window_view_explains_each_exclusion() {
    let svc = service(metrics_sheet());
    let v = body_json(handle(get("/debug/metrics/window?mls_id=100"), &svc).unwrap());

    assert_eq!(v["mlsId"], "100");
    assert_eq!(v["days"], 30);
    assert_eq!(v["includedCount"], 1);
    assert_eq!(v["excludedCount"], 2);

    let rows = v["rows"].as_array().unwrap();
    assert_eq!(rows[0]["status"], "included");
    assert!(rows[0]["reason"].is_null());
    assert_eq!(rows[1]["reason"], "too_old");
    assert_eq!(rows[2]["reason"], "bad_date");
}

#[test]
fn window_view_honours_days_param() {
    let svc = service(metrics_sheet());
    let v = body_json(handle(get("/debug/metrics/window?mls_id=100&days=60"), &svc).unwrap());
    assert_eq!(v["days"], 60);
    assert_eq!(v["includedCount"], 2);
}

#[test]
fn window_view_without_id_covers_every_listing() {
    let svc = service(metrics_sheet());
    let v = body_json(handle(get("/debug/metrics/window"), &svc).unwrap());
    assert!(v["mlsId"].is_null());
    assert_eq!(v["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn window_view_rejects_undated_tables_and_bad_days() {
    let svc = service(metrics_sheet());

    let err = handle(get("/debug/listings/window"), &svc);
    // `/debug/listings/{id}` wins for the listings slug; "window" is just an unknown id.
    assert_eq!(err.unwrap_err().status(), 404);

    let err = handle(get("/debug/feedback/window"), &svc).unwrap_err();
    assert_eq!(err.status(), 400);

    let err = handle(get("/debug/metrics/window?days=abc"), &svc).unwrap_err();
    assert_eq!(err.status(), 400);

    let err = handle(get("/debug/metrics/window?days=-1"), &svc).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn window_view_rejects_days_beyond_the_calendar() {
    let svc = service(metrics_sheet());

    for days in ["36501", "100000000", "9223372036854775807"] {
        let err = handle(get(&format!("/debug/metrics/window?days={days}")), &svc).unwrap_err();
        assert_eq!(err.status(), 400, "days={days}");
        assert!(err.to_string().contains("between 0 and 36500"));
    }

    let v = body_json(handle(get("/debug/metrics/window?mls_id=100&days=36500"), &svc).unwrap());
    assert_eq!(v["includedCount"], 2);
}

#[test]
fn listing_debug_returns_the_raw_row() {
    let svc = service(metrics_sheet());
    let v = body_json(handle(get("/debug/listings/100"), &svc).unwrap());
    assert_eq!(v["address"], "12 Elm St");

    let err = handle(get("/debug/listings/404"), &svc).unwrap_err();
    assert_eq!(err.status(), 404);
}

#[test]
fn listing_debug_decodes_percent_encoded_ids() {
    let svc = service(metrics_sheet());
    let v = body_json(handle(get("/debug/listings/ML%207%2FB"), &svc).unwrap());
    assert_eq!(v["address"], "7 Birch Rd");

    let err = handle(get("/debug/listings/%FF"), &svc).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn unknown_table_and_route_are_404() {
    let svc = service(metrics_sheet());
    assert_eq!(handle(get("/debug/nope/raw"), &svc).unwrap_err().status(), 404);
    assert_eq!(handle(get("/api/whatever"), &svc).unwrap_err().status(), 404);
}
