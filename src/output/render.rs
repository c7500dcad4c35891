use anyhow::Result;
use std::io::Write;

use crate::metadata::parse_embedded_metadata;
use crate::output::formatter::{
    CSV_HEADER, Summary, format_csv_row, format_default_line, format_kickers_line,
    format_players_line, format_summary, format_table_line,
};
use crate::server::ServerRecord;
use crate::types::{Config, DisplayMode, OutputFormat};

/// The subset of the run configuration the renderer looks at
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub mode: DisplayMode,
    pub debug: bool,
    pub format: OutputFormat,
    pub colored: bool,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        RenderOptions {
            mode: config.mode,
            debug: config.debug,
            format: config.format,
            colored: config.colored,
        }
    }
}

/// Write every server in order, plus a summary line in table modes.
/// Returns the totals accumulated along the way.
pub fn render_servers<W: Write>(
    out: &mut W,
    servers: &[ServerRecord],
    options: &RenderOptions,
) -> Result<Summary> {
    match options.format {
        OutputFormat::Plain => render_plain(out, servers, options),
        OutputFormat::Jsonl => {
            for server in servers {
                writeln!(out, "{}", serde_json::to_string(server)?)?;
            }
            Ok(totals(servers))
        }
        OutputFormat::Csv => {
            out.write_all(CSV_HEADER.as_bytes())?;
            for server in servers {
                out.write_all(format_csv_row(server).as_bytes())?;
            }
            Ok(totals(servers))
        }
    }
}

fn render_plain<W: Write>(
    out: &mut W,
    servers: &[ServerRecord],
    options: &RenderOptions,
) -> Result<Summary> {
    let mut summary = Summary {
        servers: servers.len() as u64,
        ..Default::default()
    };

    for server in servers {
        if options.debug {
            writeln!(out, "{}", server)?;
        }

        let line = match options.mode {
            DisplayMode::Display | DisplayMode::Display2 => {
                let meta = parse_embedded_metadata(&server.gametype);
                summary.queue += meta.queue_size;
                summary.players += u64::from(server.players);
                format_table_line(
                    server,
                    &meta,
                    options.mode == DisplayMode::Display2,
                    options.colored,
                )
            }
            DisplayMode::Players => format_players_line(server),
            DisplayMode::Kickers => format_kickers_line(server),
            DisplayMode::Default => format_default_line(server),
        };
        out.write_all(line.as_bytes())?;
    }

    if !options.mode.is_table() {
        return Ok(totals(servers));
    }

    out.write_all(format_summary(&summary, options.colored).as_bytes())?;
    Ok(summary)
}

fn totals(servers: &[ServerRecord]) -> Summary {
    Summary {
        players: servers.iter().map(|s| u64::from(s.players)).sum(),
        servers: servers.len() as u64,
        queue: servers
            .iter()
            .map(|s| parse_embedded_metadata(&s.gametype).queue_size)
            .sum(),
    }
}
