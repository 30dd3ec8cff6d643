use serde::Serialize;

use super::stats::{BattingCareer, BattingStats, PitchingCareer, PitchingStats};
use super::transfer::Transfer;

/// Profile facts from a player's detail page.
///
/// Unlike [`super::Player`], hands and body measurements are kept as the
/// page prints them (`"左"`, `"170cm"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub player_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_kana: Option<String>,
    pub uniform_number: String,
    pub team: String,
    pub position: String,
    pub throwing_hand: String,
    pub batting_hand: String,
    pub height: String,
    pub weight: String,
    pub birth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_info: Option<String>,
    /// Year taken from `draft_info`, e.g. 2017 from "2017年ドラフト1位".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_year: Option<u16>,
}

/// Everything extracted from one player detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    pub profile: PlayerProfile,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pitching_stats: Vec<PitchingStats>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub batting_stats: Vec<BattingStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_pitching: Option<PitchingCareer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_batting: Option<BattingCareer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transfers: Vec<Transfer>,
}
