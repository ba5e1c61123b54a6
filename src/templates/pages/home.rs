// templates/pages/home.rs

use crate::sheets::Table;
use crate::templates::{
    components::{card, endpoint},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Seller Dashboard API",
        html! {
            main class="container" {
                h1 { "Seller Dashboard API is live" }

                (card("Endpoints", html! {
                    ul {
                        (endpoint("GET", "/api/listings/{id}/summary", "30-day listing summary"))
                        (endpoint("GET", "/health/sheets", "checks the sheet is reachable"))
                        (endpoint("GET", "/debug/listings/{id}", "raw listing row"))
                        (endpoint("GET", "/debug/{table}/raw", "table as read"))
                        (endpoint("GET", "/debug/{table}/window?mls_id=&days=", "rows with their window verdict"))
                    }
                }))

                (card("Tables", html! {
                    ul {
                        @for table in Table::ALL {
                            li { code { (table.slug()) } " - " (table.range()) }
                        }
                    }
                }))
            }
        },
    )
}
