use clap::Parser;
use std::time::Duration;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS};

/// Output format options
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Jsonl,
    Csv,
}

/// CLI arguments structure
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // QUERY
    /// Steam API key (**REQUIRED**).
    #[arg(long, help_heading = "QUERY")]
    pub key: Option<String>,

    /// Limit search results.
    #[arg(long, default_value_t = DEFAULT_LIMIT, help_heading = "QUERY")]
    pub limit: u32,

    /// Server-side filter string (e.g., "\appid\221100").
    #[arg(long, help_heading = "QUERY")]
    pub filter: Option<String>,

    // DISPLAY
    /// Show player info.
    #[arg(long, help_heading = "DISPLAY")]
    pub players: bool,

    /// Show debug output.
    #[arg(long, help_heading = "DISPLAY")]
    pub debug: bool,

    /// Display full server info table.
    #[arg(long, help_heading = "DISPLAY")]
    pub display: bool,

    /// Display full server info table and IP/Port.
    #[arg(long, help_heading = "DISPLAY")]
    pub display2: bool,

    /// Display server info with kick in name.
    #[arg(long, help_heading = "DISPLAY")]
    pub kickers: bool,

    // NETWORK
    /// Timeout for the request in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, help_heading = "NETWORK")]
    pub timeout: u64,

    /// Server list endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT, help_heading = "NETWORK")]
    pub endpoint: String,

    /// Use a proxy for the request (e.g., "http://127.0.0.1:8080").
    #[arg(long, help_heading = "NETWORK")]
    pub proxy: Option<String>,

    // OUTPUT
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain, help_heading = "OUTPUT")]
    pub format: OutputFormat,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "OUTPUT")]
    pub verbose: u8,
}

/// Long flags also accepted with a single dash, e.g. `-key=ABC`
const SINGLE_DASH_FLAGS: [&str; 13] = [
    "key", "limit", "filter", "players", "debug", "display", "display2", "kickers", "timeout",
    "endpoint", "proxy", "format", "no-color",
];

/// Rewrite single-dash long flags to their `--` form. Arguments after `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough || arg.starts_with("--") {
                passthrough |= arg == "--";
                return arg;
            }
            let name = arg
                .strip_prefix('-')
                .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name));
            match name {
                Some(name) if SINGLE_DASH_FLAGS.contains(&name) => format!("-{}", arg),
                _ => arg,
            }
        })
        .collect()
}

/// How each server line is laid out in plain output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Default,
    Players,
    Kickers,
    Display,
    Display2,
}

impl DisplayMode {
    /// Resolve the mode from the CLI flags. Table modes win over the short ones.
    pub fn from_flags(display: bool, display2: bool, players: bool, kickers: bool) -> Self {
        if display2 {
            DisplayMode::Display2
        } else if display {
            DisplayMode::Display
        } else if players {
            DisplayMode::Players
        } else if kickers {
            DisplayMode::Kickers
        } else {
            DisplayMode::Default
        }
    }

    pub fn is_table(self) -> bool {
        matches!(self, DisplayMode::Display | DisplayMode::Display2)
    }
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub key: String,
    pub limit: u32,
    pub filter: Option<String>,
    pub mode: DisplayMode,
    pub debug: bool,
    pub timeout: Duration,
    pub endpoint: String,
    pub proxy: Option<String>,
    pub format: OutputFormat,
    pub colored: bool,
}

impl Config {
    /// Build the run configuration. Returns `None` when no usable API key was given.
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        let key = cli.key.as_deref().filter(|k| !k.is_empty())?.to_string();

        Some(Config {
            key,
            limit: cli.limit,
            filter: cli.filter.clone().filter(|f| !f.is_empty()),
            mode: DisplayMode::from_flags(cli.display, cli.display2, cli.players, cli.kickers),
            debug: cli.debug,
            timeout: Duration::from_secs(cli.timeout),
            endpoint: cli.endpoint.clone(),
            proxy: cli.proxy.clone(),
            format: cli.format,
            colored: !cli.no_color,
        })
    }
}
