// src/tests/router_tests/summary_tests.rs

use crate::router::handle;
use crate::sheets::Table;
use crate::tests::utils::{body_json, days_ago, get, service, FakeSheet};
use serde_json::json;

const LISTING_HEADER: &[&str] = &[
    "mls_id",
    "address",
    "status",
    "list_price",
    "original_list_price",
    "dom",
    "cdom",
    "open_house_start",
    "open_house_end",
    "photo_url",
    "mls_url",
];

fn seeded_sheet() -> FakeSheet {
    let (d1, d3, d5, d40) = (days_ago(1), days_ago(3), days_ago(5), days_ago(40));

    FakeSheet::new()
        .with_table(
            Table::Listings,
            &[
                LISTING_HEADER,
                &["99", "1 Oak Ave", "Sold", "1", "1", "1", "1", "", "", "", ""],
                &["100", "12 Elm St", "Active", "500000", "525000", "", "21", "2025-07-05 13:00", "2025-07-05 15:00", "", "https://mls.example/100"],
            ],
        )
        .with_table(
            Table::MetricsDaily,
            &[
                &["mls_id", "date", "page_views", "unique_users"],
                &["100", d5.as_str(), "10", "6"],
                &["100", d40.as_str(), "999", "999"],
                &["99", d1.as_str(), "50", "50"],
            ],
        )
        .with_table(
            Table::ShowingsDaily,
            &[
                &["mls_id", "date", "scheduled", "completed"],
                &["100", d1.as_str(), "2", "1"],
                &["100", d3.as_str(), "1", ""],
            ],
        )
        .with_table(
            Table::AdsDaily,
            &[
                &["mls_id", "date", "impressions", "clicks", "cost_usd", "channel"],
                &["100", d1.as_str(), "1000", "5", "10.10", "facebook"],
                &["100", d3.as_str(), "500", "0", "2.00", "google"],
            ],
        )
        .with_table(
            Table::Feedback,
            &[
                &["mls_id", "submitted_at", "rating", "comments"],
                &["100", d5.as_str(), "4", "Nice yard"],
                &["100", d1.as_str(), "3", "Small kitchen"],
                &["99", d1.as_str(), "5", "Other listing"],
            ],
        )
}

#[test]
fn summary_rolls_up_the_last_30_days() {
    let svc = service(seeded_sheet());

    let resp = handle(get("/api/listings/100/summary"), &svc).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let v = body_json(resp);

    assert_eq!(v["listingId"], "100");
    assert_eq!(v["address"], "12 Elm St");
    assert_eq!(v["mls_url"], "https://mls.example/100");
    assert_eq!(v["photo_url"], json!(null));
    assert_eq!(v["status"]["value"], "Active");
    assert_eq!(v["price"]["current"], 500000);
    assert_eq!(v["price"]["original"], 525000);
    assert_eq!(v["price"]["currency"], "USD");
    assert_eq!(v["marketDays"]["dom"], json!(null));
    assert_eq!(v["marketDays"]["cdom"], 21);
    assert_eq!(v["openHouseNext"]["start"], "2025-07-05 13:00");

    let kpis = v["kpis"].as_array().unwrap();
    assert_eq!(kpis.len(), 6);
    assert_eq!(kpis[0]["key"], "page_views");
    // The 40-day-old 999 row falls outside the window.
    assert_eq!(kpis[0]["value"], 10);
    assert_eq!(kpis[1]["value"], 6);
    assert_eq!(kpis[2]["value"], 3);
    assert_eq!(kpis[3]["value"], 1);
    assert_eq!(kpis[4]["value"], 1500);
    assert_eq!(kpis[5]["value"], 5);

    assert_eq!(
        v["marketing"],
        json!({
            "impressions_30d": 1500,
            "clicks_30d": 5,
            "cost_30d_usd": 12.1,
            "cpc_30d_usd": 2.42,
            "source": "Google Sheet"
        })
    );

    let feedback = v["feedback"].as_array().unwrap();
    assert_eq!(feedback.len(), 2);
    assert_eq!(feedback[0]["comments"], "Small kitchen");
    assert_eq!(feedback[1]["comments"], "Nice yard");
}

#[test]
fn encoded_id_is_decoded_and_echoed_as_requested() {
    let svc = service(seeded_sheet());

    let resp = handle(get("/api/listings/%20100/summary"), &svc).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let v = body_json(resp);

    assert_eq!(v["listingId"], " 100");
    assert_eq!(v["address"], "12 Elm St");
    assert_eq!(v["kpis"][0]["value"], 10);
}

#[test]
fn all_blocks_share_one_timestamp() {
    let svc = service(seeded_sheet());
    let v = body_json(handle(get("/api/listings/100/summary"), &svc).unwrap());

    let stamp = v["status"]["updatedAt"].clone();
    assert!(stamp.as_str().unwrap().ends_with('Z'));
    for block in ["price", "marketDays", "openHouseNext"] {
        assert_eq!(v[block]["updatedAt"], stamp, "{block} has a different timestamp");
    }
}

#[test]
fn unknown_listing_is_404_and_reads_nothing_else() {
    let svc = service(seeded_sheet());

    let err = handle(get("/api/listings/12345/summary"), &svc).unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(err.to_string(), "Listing not found in Sheet");

    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp), json!({ "error": "Listing not found in Sheet" }));

    assert_eq!(svc_reads(&svc), vec!["Listings"]);
}

#[test]
fn unreadable_ads_tab_degrades_to_zeros() {
    let svc = service(seeded_sheet().failing(Table::AdsDaily));

    let resp = handle(get("/api/listings/100/summary"), &svc).expect("summary should still succeed");
    assert_eq!(resp.status(), 200);
    let v = body_json(resp);

    assert_eq!(
        v["marketing"],
        json!({
            "impressions_30d": 0,
            "clicks_30d": 0,
            "cost_30d_usd": 0,
            "cpc_30d_usd": null,
            "source": "Google Sheet"
        })
    );
    assert_eq!(v["kpis"][4]["value"], 0);
    assert_eq!(v["kpis"][0]["value"], 10);
    assert_eq!(v["feedback"].as_array().unwrap().len(), 2);
}

#[test]
fn other_read_failures_are_500() {
    let svc = service(seeded_sheet().failing(Table::MetricsDaily));

    let err = handle(get("/api/listings/100/summary"), &svc).unwrap_err();
    assert_eq!(err.status(), 500);
    assert!(err.to_string().contains("Unable to parse range"));

    let v = body_json(crate::responses::error_to_response(err));
    assert!(v["error"].as_str().unwrap().contains("Metrics_Daily"));
}

#[test]
fn listing_read_failure_is_500_not_404() {
    let svc = service(seeded_sheet().failing(Table::Listings));
    let err = handle(get("/api/listings/100/summary"), &svc).unwrap_err();
    assert_eq!(err.status(), 500);
}

#[test]
fn every_table_is_read_once_for_a_found_listing() {
    let svc = service(seeded_sheet());
    handle(get("/api/listings/100/summary"), &svc).unwrap();

    let mut tabs = svc_reads(&svc);
    assert_eq!(tabs[0], "Listings");
    tabs.sort();
    assert_eq!(
        tabs,
        vec!["Ads_Daily", "Feedback", "Listings", "Metrics_Daily", "Showings_Daily"]
    );
}

#[test]
fn missing_ads_tab_without_clicks_keeps_cpc_null() {
    let svc = service(seeded_sheet().with_table(
        Table::AdsDaily,
        &[&["mls_id", "date", "impressions", "clicks", "cost_usd"]],
    ));
    let v = body_json(handle(get("/api/listings/100/summary"), &svc).unwrap());
    assert_eq!(v["marketing"]["cpc_30d_usd"], json!(null));
    assert_eq!(v["marketing"]["clicks_30d"], 0);
}

fn svc_reads(svc: &crate::service::DashboardService<FakeSheet>) -> Vec<String> {
    svc.source().tabs_read()
}
