mod auth;
mod client;
mod sheets_error;
mod source;
mod tables;

pub use client::SheetsClient;
pub use sheets_error::SheetsError;
pub use source::{Grid, TableSource};
pub use tables::Table;
