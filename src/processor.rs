use anyhow::Result;
use std::io::{self, Write};
use tracing::info;

use crate::http::{build_http_client, build_server_list_url, ensure_json, fetch_server_list};
use crate::output::{RenderOptions, Summary, render_servers};
use crate::server::{decode_server_list, sort_by_name};
use crate::types::Config;

/// Fetch the server list and print it to stdout
pub async fn run(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(config, &mut handle).await?;
    Ok(())
}

/// Fetch, decode, sort and render into `out`
pub async fn run_with_writer<W: Write>(config: &Config, out: &mut W) -> Result<Summary> {
    let url = build_server_list_url(
        &config.endpoint,
        &config.key,
        config.limit,
        config.filter.as_deref(),
    )?;
    let client = build_http_client(config)?;
    let body = fetch_server_list(&client, url).await?;

    let summary = process_body(&body, &RenderOptions::from(config), out)?;
    info!(
        servers = summary.servers,
        players = summary.players,
        queue = summary.queue,
        "server list rendered"
    );
    Ok(summary)
}

/// Turn a raw response body into rendered output.
///
/// Everything is rendered into memory first, so a bad payload never leaves
/// partial output behind.
pub fn process_body<W: Write>(
    body: &[u8],
    options: &RenderOptions,
    out: &mut W,
) -> Result<Summary> {
    ensure_json(body)?;
    let mut servers = decode_server_list(body)?;
    sort_by_name(&mut servers);

    let mut buffer = Vec::new();
    let summary = render_servers(&mut buffer, &servers, options)?;
    out.write_all(&buffer)?;
    out.flush()?;
    Ok(summary)
}
