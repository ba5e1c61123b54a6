use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One `METHOD path - what it returns` line.
pub fn endpoint(method: &str, path: &str, about: &str) -> Markup {
    html! {
        li {
            code { (method) " " (path) }
            " - " (about)
        }
    }
}
