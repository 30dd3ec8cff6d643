use chrono::{DateTime, Utc};
use serde::Serialize;

use super::player::Player;

/// One of the two NPB leagues.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum League {
    Central,
    Pacific,
}

/// A team from the static registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Short code, e.g. `g` for the Giants.
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub league: League,
    pub roster_url: &'static str,
}

/// A team's roster as extracted from its roster page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoster {
    pub team: Team,
    pub players: Vec<Player>,
    pub last_updated: DateTime<Utc>,
}
