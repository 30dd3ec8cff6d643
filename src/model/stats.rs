use serde::Serialize;

/// One season of first-team pitching.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStats {
    pub year: String,
    pub team: String,
    pub games: f64,
    pub wins: f64,
    pub losses: f64,
    pub saves: f64,
    pub holds: f64,
    pub hp: f64,
    pub complete_games: f64,
    pub shutouts: f64,
    pub no_walks: f64,
    pub winning_percentage: f64,
    pub batters: f64,
    pub innings: f64,
    pub hits: f64,
    pub home_runs: f64,
    pub strikeouts: f64,
    pub strikeouts_per9: f64,
    pub walks: f64,
    pub hit_by_pitch: f64,
    pub wild_pitches: f64,
    pub balks: f64,
    pub runs_allowed: f64,
    pub earned_runs: f64,
    pub era: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub whip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_runs_per9: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walks_per9: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikeout_walk_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting_average_against: Option<f64>,
}

impl PitchingStats {
    /// Fill the derived rates whose denominators are positive.
    pub(crate) fn derive_rates(&mut self) {
        if self.innings > 0.0 {
            self.whip = Some((self.walks + self.hits) / self.innings);
            self.home_runs_per9 = Some(self.home_runs * 9.0 / self.innings);
            self.walks_per9 = Some(self.walks * 9.0 / self.innings);
        }
        if self.walks > 0.0 {
            self.strikeout_walk_ratio = Some(self.strikeouts / self.walks);
        }
        let at_bats_against = self.batters - self.walks - self.hit_by_pitch;
        if at_bats_against > 0.0 {
            self.batting_average_against = Some(self.hits / at_bats_against);
        }
    }
}

/// One season of first-team batting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingStats {
    pub year: String,
    pub team: String,
    pub games: f64,
    pub plate_appearances: f64,
    pub at_bats: f64,
    pub runs: f64,
    pub hits: f64,
    pub doubles: f64,
    pub triples: f64,
    pub home_runs: f64,
    pub total_bases: f64,
    pub rbi: f64,
    pub stolen_bases: f64,
    pub caught_stealing: f64,
    pub sacrifice_hits: f64,
    pub sacrifice_flies: f64,
    pub walks: f64,
    pub intentional_walks: f64,
    pub hit_by_pitch: f64,
    pub strikeouts: f64,
    pub grounded_into_double_plays: f64,
    pub average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
    pub ops: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub babip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikeout_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_run_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stolen_base_percentage: Option<f64>,
}

impl BattingStats {
    /// Fill the derived rates. ISO is always set.
    pub(crate) fn derive_rates(&mut self) {
        self.iso = Some(self.slugging_percentage - self.average);

        let balls_in_play = self.at_bats - self.strikeouts - self.home_runs;
        if balls_in_play > 0.0 {
            self.babip = Some((self.hits - self.home_runs) / balls_in_play);
        }
        if self.plate_appearances > 0.0 {
            self.strikeout_rate = Some(self.strikeouts / self.plate_appearances);
            self.walk_rate = Some(self.walks / self.plate_appearances);
            self.home_run_rate = Some(self.home_runs / self.plate_appearances);
        }
        let attempts = self.stolen_bases + self.caught_stealing;
        if attempts > 0.0 {
            self.stolen_base_percentage = Some(self.stolen_bases / attempts);
        }
    }
}

/// Career pitching totals ("通算" row). Only the commonly published columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingCareer {
    pub games: f64,
    pub wins: f64,
    pub losses: f64,
    pub saves: f64,
    pub holds: f64,
    pub era: f64,
}

/// Career batting totals ("通算" row).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingCareer {
    pub games: f64,
    pub plate_appearances: f64,
    pub at_bats: f64,
    pub hits: f64,
    pub average: f64,
}
