use serde::Serialize;

/// Fielding position as grouped on a roster page.
#[derive(
    Default,
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
pub enum Position {
    #[default]
    Pitcher,
    Catcher,
    Infielder,
    Outfielder,
}

impl Position {
    /// The heading word used for this position on npb.jp pages.
    pub fn keyword(self) -> &'static str {
        match self {
            Position::Pitcher => "投手",
            Position::Catcher => "捕手",
            Position::Infielder => "内野手",
            Position::Outfielder => "外野手",
        }
    }

    /// Find the first position keyword contained in `text`.
    pub(crate) fn find_in(text: &str) -> Option<Self> {
        [
            Position::Pitcher,
            Position::Catcher,
            Position::Infielder,
            Position::Outfielder,
        ]
        .into_iter()
        .find(|p| text.contains(p.keyword()))
    }
}

/// Throwing or batting hand.
#[derive(
    Default,
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
pub enum Hand {
    #[default]
    #[serde(rename = "右")]
    #[strum(serialize = "右")]
    Right,
    #[serde(rename = "左")]
    #[strum(serialize = "左")]
    Left,
    #[serde(rename = "両")]
    #[strum(serialize = "両")]
    Both,
}

impl Hand {
    /// Unknown or empty text falls back to [`Hand::Right`].
    pub(crate) fn from_cell(text: &str) -> Self {
        text.trim().parse().unwrap_or_default()
    }
}

/// Registration category of a player on a team.
#[derive(
    Default,
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
pub enum PlayerCategory {
    /// 支配下登録選手
    #[default]
    Registered,
    /// 育成選手
    Development,
}

/// A player row from a team roster page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub number: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_kana: Option<String>,
    pub birth_date: String,
    /// Centimeters.
    pub height: u32,
    /// Kilograms.
    pub weight: u32,
    pub pitching_hand: Hand,
    pub batting_hand: Hand,
    pub position: Position,
    pub category: PlayerCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub team_id: String,
    /// Eight-digit id from the player's detail page link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
}

/// Filters for [`crate::NpbClient::search_players`]. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct PlayerQuery {
    pub name: Option<String>,
    pub team_id: Option<String>,
    pub position: Option<Position>,
    pub number: Option<String>,
}

impl PlayerQuery {
    pub(crate) fn matches(&self, player: &Player) -> bool {
        let name_ok = self.name.as_deref().is_none_or(|name| {
            crate::name::matches_player_name(name, &player.name, player.name_kana.as_deref())
        });
        let position_ok = self.position.is_none_or(|p| p == player.position);
        let number_ok = self.number.as_deref().is_none_or(|n| n == player.number);
        name_ok && position_ok && number_ok
    }
}
