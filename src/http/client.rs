use anyhow::Result;
use reqwest::{Client, Url};
use std::net::IpAddr;

use crate::constants::USER_AGENT;
use crate::types::Config;

/// Build HTTP client from the run configuration
pub fn build_http_client(config: &Config) -> Result<Client> {
    let mut client_builder = Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT);

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)?;
        client_builder = client_builder.proxy(proxy);
    } else if is_loopback(&config.endpoint) {
        // Environment proxies must not intercept a local endpoint
        client_builder = client_builder.no_proxy();
    }

    Ok(client_builder.build()?)
}

fn is_loopback(endpoint: &str) -> bool {
    let Ok(url) = Url::parse(endpoint) else {
        return false;
    };
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}
