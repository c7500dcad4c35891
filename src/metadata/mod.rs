use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::constants::FIRST_PERSON_MARKER;
use crate::utils::format_multiplier;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,2}:[0-9]{1,2}").expect("valid time regex"));
// Multipliers need a fractional part; bare integers like `etm100` fall back to 1x.
static DAY_MULTIPLIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"etm([0-9]{1,3}\.[0-9]{1,6})").expect("valid etm regex"));
static NIGHT_MULTIPLIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"entm([0-9]{1,3}\.[0-9]{1,6})").expect("valid entm regex"));
static QUEUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lqs([0-9]+)").expect("valid lqs regex"));

/// Camera perspective advertised by a server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    FirstPerson,
    ThirdPerson,
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Perspective::FirstPerson => write!(f, "1PP"),
            Perspective::ThirdPerson => write!(f, "3PP"),
        }
    }
}

/// Metadata scraped out of the free-text gametype tags
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedMetadata {
    pub time: Option<String>,
    pub day_multiplier: f64,
    pub night_multiplier: f64,
    pub queue_size: u64,
    pub perspective: Perspective,
}

impl EmbeddedMetadata {
    /// Render the multipliers as `day/night`, e.g. `2x/0.5x`
    pub fn multipliers(&self) -> String {
        format!(
            "{}/{}",
            format_multiplier(self.day_multiplier),
            format_multiplier(self.night_multiplier)
        )
    }

    pub fn time_or_empty(&self) -> &str {
        self.time.as_deref().unwrap_or("")
    }
}

/// Parse time, multipliers, queue size and perspective out of a gametype string.
/// Anything that does not match falls back to its default.
pub fn parse_embedded_metadata(gametype: &str) -> EmbeddedMetadata {
    let time = TIME_RE.find(gametype).map(|m| m.as_str().to_string());

    let day_multiplier = capture_parse(&DAY_MULTIPLIER_RE, gametype).unwrap_or(1.0);
    let night_multiplier = capture_parse(&NIGHT_MULTIPLIER_RE, gametype).unwrap_or(1.0);
    let queue_size = capture_parse(&QUEUE_RE, gametype).unwrap_or(0);

    let perspective = if gametype.contains(FIRST_PERSON_MARKER) {
        Perspective::FirstPerson
    } else {
        Perspective::ThirdPerson
    };

    EmbeddedMetadata {
        time,
        day_multiplier,
        night_multiplier,
        queue_size,
        perspective,
    }
}

fn capture_parse<T: std::str::FromStr>(re: &Regex, haystack: &str) -> Option<T> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
