pub mod constants;
pub mod http;
pub mod logging;
pub mod metadata;
pub mod output;
pub mod processor;
pub mod server;
pub mod types;
pub mod utils;
