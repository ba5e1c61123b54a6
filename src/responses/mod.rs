pub mod errors;
pub mod html;
pub mod json;

pub use errors::error_to_response;
pub use crate::errors::ResultResp;

// Normal responses
pub use html::html_response;
pub use json::{json_response, json_response_with_status};
