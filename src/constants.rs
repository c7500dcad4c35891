/// Steam Web API endpoint for the game server list
pub const DEFAULT_ENDPOINT: &str =
    "https://api.steampowered.com/IGameServersService/GetServerList/v1/";

/// Query defaults
pub const DEFAULT_LIMIT: u32 = 10_000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Apps whose gametype field carries time, multiplier and queue tags
pub const TAGGED_APP_IDS: [u32; 2] = [221_100, 1_024_020];

/// Name column widths for display mode
pub const TAGGED_NAME_WIDTH: usize = 50;
pub const OTHER_NAME_MAX: usize = 52;
pub const OTHER_NAME_WIDTH: usize = 56;

/// Kickers mode address column width
pub const ADDRESS_WIDTH: usize = 15;

/// Gametype marker for first-person-only servers
pub const FIRST_PERSON_MARKER: &str = "no3rd";

pub const USER_AGENT: &str = concat!("steamlist/", env!("CARGO_PKG_VERSION"));
