//! Student location normalization.
//!
//! The backend reports a student's whereabouts as free text in either
//! German display form or English wire tokens. The dashboard only ever shows
//! the closed vocabulary of [`Location`].

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// Display label used for any location that cannot be recognised.
pub const UNKNOWN_LOCATION: &str = "Unbekannt";

lazy_static! {
    static ref PRESENT_RE: Regex =
        Regex::new(r"(?i)^(?:anwesend|present|in[_ ]house)(?:\s*[-:]\s*(?P<room>.+))?$")
            .expect("valid location regex");
}

/// Closed set of locations the dashboard can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Home,
    /// Checked in, optionally with the room the student is in.
    Present { room: Option<String> },
    InTransit,
    Schoolyard,
    Bus,
    Unknown,
}

impl Location {
    /// Parses a raw backend location; absent or unrecognised values are `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Location::Unknown;
        };

        if let Some(caps) = PRESENT_RE.captures(raw) {
            let room = caps
                .name("room")
                .map(|m| m.as_str().trim().to_string())
                .filter(|r| !r.is_empty());
            return Location::Present { room };
        }

        match raw.to_lowercase().as_str() {
            "zuhause" | "home" => Location::Home,
            "unterwegs" | "in_transit" | "transit" => Location::InTransit,
            "schulhof" | "school_yard" | "schoolyard" => Location::Schoolyard,
            "bus" => Location::Bus,
            "unbekannt" | "unknown" => Location::Unknown,
            other => {
                tracing::debug!(location = %other, "Unrecognised student location");
                Location::Unknown
            }
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Location::Present { .. })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Home => write!(f, "Zuhause"),
            Location::Present { room: Some(room) } => write!(f, "Anwesend - {}", room),
            Location::Present { room: None } => write!(f, "Anwesend"),
            Location::InTransit => write!(f, "Unterwegs"),
            Location::Schoolyard => write!(f, "Schulhof"),
            Location::Bus => write!(f, "Bus"),
            Location::Unknown => write!(f, "{}", UNKNOWN_LOCATION),
        }
    }
}

/// Maps an arbitrary or missing backend location to its display label.
pub fn normalize_location(raw: Option<&str>) -> String {
    Location::parse(raw).to_string()
}
