use colored::*;

use crate::constants::{
    ADDRESS_WIDTH, OTHER_NAME_MAX, OTHER_NAME_WIDTH, TAGGED_APP_IDS, TAGGED_NAME_WIDTH,
};
use crate::metadata::{EmbeddedMetadata, Perspective};
use crate::server::ServerRecord;
use crate::utils::{group_thousands, sanitize_name, truncate};

/// Running totals printed after a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub players: u64,
    pub servers: u64,
    pub queue: u64,
}

/// `<ip> <port>`
pub fn format_default_line(server: &ServerRecord) -> String {
    let (ip, port) = server.split_address();
    format!("{} {}\n", ip, port)
}

/// `<ip> <port> <players> <max_players>`
pub fn format_players_line(server: &ServerRecord) -> String {
    let (ip, port) = server.split_address();
    format!("{} {} {} {}\n", ip, port, server.players, server.max_players)
}

/// `<ip>\t<query port>\t<name>`
pub fn format_kickers_line(server: &ServerRecord) -> String {
    let (ip, _) = server.split_address();
    format!(
        "{:<width$}\t{}\t{}\n",
        ip,
        server.gameport,
        server.name,
        width = ADDRESS_WIDTH
    )
}

/// Table row for `--display` and `--display2`.
///
/// Servers of the tagged apps get the time, multiplier and perspective columns;
/// everything else gets a wider name column with only time and version.
pub fn format_table_line(
    server: &ServerRecord,
    meta: &EmbeddedMetadata,
    with_address: bool,
    colored: bool,
) -> String {
    let name = sanitize_name(&server.name);

    if TAGGED_APP_IDS.contains(&server.appid) {
        let name = truncate(&name, TAGGED_NAME_WIDTH);
        let perspective = format_perspective(meta.perspective, colored);
        let mut line = format!(
            "{:<width$} {:>3}/{:<3} {} {} {} {}",
            name,
            server.players,
            server.max_players,
            meta.time_or_empty(),
            meta.multipliers(),
            perspective,
            server.version,
            width = TAGGED_NAME_WIDTH
        );
        if with_address {
            let (ip, port) = server.split_address();
            line.push_str(&format!(" {} {}", ip, port));
        }
        line.push('\n');
        line
    } else {
        let name = truncate(&name, OTHER_NAME_MAX);
        format!(
            "{:<width$} {:>2}/{:>2} {} {}\n",
            name,
            server.players,
            server.max_players,
            meta.time_or_empty(),
            server.version,
            width = OTHER_NAME_WIDTH
        )
    }
}

fn format_perspective(perspective: Perspective, colored: bool) -> String {
    let label = perspective.to_string();
    if !colored {
        return label;
    }
    match perspective {
        Perspective::FirstPerson => label.green().to_string(),
        Perspective::ThirdPerson => label.yellow().to_string(),
    }
}

/// Blank line then `<players> players on <servers> servers and <queue> in queue`
pub fn format_summary(summary: &Summary, colored: bool) -> String {
    let players = group_thousands(summary.players as i64);
    let servers = group_thousands(summary.servers as i64);
    let queue = group_thousands(summary.queue as i64);

    if colored {
        format!(
            "\n{} players on {} servers and {} in queue\n",
            players.green(),
            servers.cyan(),
            queue.yellow()
        )
    } else {
        format!(
            "\n{} players on {} servers and {} in queue\n",
            players, servers, queue
        )
    }
}

pub const CSV_HEADER: &str =
    "\"addr\",\"gameport\",\"name\",\"appid\",\"players\",\"max_players\",\"map\",\"version\",\"gametype\"\n";

/// One quoted CSV row per server
pub fn format_csv_row(server: &ServerRecord) -> String {
    format!(
        "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"\n",
        csv_escape(&server.addr),
        server.gameport,
        csv_escape(&server.name),
        server.appid,
        server.players,
        server.max_players,
        csv_escape(&server.map),
        csv_escape(&server.version),
        csv_escape(&server.gametype)
    )
}

fn csv_escape(field: &str) -> String {
    field.replace('"', "\"\"")
}
