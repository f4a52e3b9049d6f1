use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which view of the application is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    Login,
    Home,
    Report,
    Profile,
    Points,
    Schedule,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Login,
        Screen::Home,
        Screen::Report,
        Screen::Profile,
        Screen::Points,
        Screen::Schedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Home => "home",
            Screen::Report => "report",
            Screen::Profile => "profile",
            Screen::Points => "points",
            Screen::Schedule => "schedule",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Screen {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Screen::ALL
            .iter()
            .copied()
            .find(|screen| screen.as_str() == lower)
            .ok_or_else(|| crate::Error::Parse(format!("unknown screen '{s}'")))
    }
}
