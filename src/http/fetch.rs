use anyhow::{Context, Result, bail};
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::http::request::redact_key;

/// Fetch the raw server list body. The JSON shape is checked by the caller.
pub async fn fetch_server_list(client: &Client, url: Url) -> Result<Vec<u8>> {
    let display_url = redact_key(&url);
    info!(url = %display_url, "requesting server list");

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {}", display_url))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .with_context(|| format!("reading response body from {}", display_url))?;
    debug!(status = %status, size = body.len(), "response received");

    if !status.is_success() {
        bail!(
            "server list request failed with {} -> {}",
            status,
            String::from_utf8_lossy(&body)
        );
    }

    Ok(body.to_vec())
}

/// Reject bodies that do not start with a JSON object
pub fn ensure_json(body: &[u8]) -> Result<()> {
    if body.first() != Some(&b'{') {
        bail!("no json received -> {}", String::from_utf8_lossy(body));
    }
    Ok(())
}
