use anyhow::{Context, Result};
use reqwest::Url;

/// Build the server list URL with an escaped key and optional filter
pub fn build_server_list_url(
    endpoint: &str,
    key: &str,
    limit: u32,
    filter: Option<&str>,
) -> Result<Url> {
    let mut url =
        Url::parse(endpoint).with_context(|| format!("invalid endpoint: {}", endpoint))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("limit", &limit.to_string());
        query.append_pair("key", key);
        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            query.append_pair("filter", filter);
        }
    }

    Ok(url)
}

/// Format a URL for logs with the API key masked
pub fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == "key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
