pub mod client;
pub mod fetch;
pub mod request;

pub use client::build_http_client;
pub use fetch::{ensure_json, fetch_server_list};
pub use request::{build_server_list_url, redact_key};
