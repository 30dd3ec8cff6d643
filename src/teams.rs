use crate::model::{League, Team};

/// All twelve NPB clubs, Central League first.
pub static TEAMS: [Team; 12] = [
    Team {
        id: "g",
        name: "ジャイアンツ",
        full_name: "読売ジャイアンツ",
        league: League::Central,
        roster_url: "https://npb.jp/bis/teams/rst_g.html",
    },
    Team {
        id: "t",
        name: "タイガース",
        full_name: "阪神タイガース",
        league: League::Central,
        roster_url: "https://npb.jp/bis/teams/rst_t.html",
    },
    Team {
        id: "db",
        name: "ベイスターズ",
        full_name: "横浜DeNAベイスターズ",
        league: League::Central,
        roster_url: "https://npb.jp/bis/teams/rst_db.html",
    },
    Team {
        id: "c",
        name: "カープ",
        full_name: "広島東洋カープ",
        league: League::Central,
        roster_url: "https://npb.jp/bis/teams/rst_c.html",
    },
    Team {
        id: "s",
        name: "スワローズ",
        full_name: "東京ヤクルトスワローズ",
        league: League::Central,
        roster_url: "https://npb.jp/bis/teams/rst_s.html",
    },
    Team {
        id: "d",
        name: "ドラゴンズ",
        full_name: "中日ドラゴンズ",
        league: League::Central,
        roster_url: "https://npb.jp/bis/teams/rst_d.html",
    },
    Team {
        id: "h",
        name: "ホークス",
        full_name: "福岡ソフトバンクホークス",
        league: League::Pacific,
        roster_url: "https://npb.jp/bis/teams/rst_h.html",
    },
    Team {
        id: "f",
        name: "ファイターズ",
        full_name: "北海道日本ハムファイターズ",
        league: League::Pacific,
        roster_url: "https://npb.jp/bis/teams/rst_f.html",
    },
    Team {
        id: "m",
        name: "マリーンズ",
        full_name: "千葉ロッテマリーンズ",
        league: League::Pacific,
        roster_url: "https://npb.jp/bis/teams/rst_m.html",
    },
    Team {
        id: "e",
        name: "イーグルス",
        full_name: "東北楽天ゴールデンイーグルス",
        league: League::Pacific,
        roster_url: "https://npb.jp/bis/teams/rst_e.html",
    },
    Team {
        id: "bs",
        name: "バファローズ",
        full_name: "オリックス・バファローズ",
        league: League::Pacific,
        roster_url: "https://npb.jp/bis/teams/rst_bs.html",
    },
    Team {
        id: "l",
        name: "ライオンズ",
        full_name: "埼玉西武ライオンズ",
        league: League::Pacific,
        roster_url: "https://npb.jp/bis/teams/rst_l.html",
    },
];

pub fn all_teams() -> &'static [Team] {
    &TEAMS
}

pub fn team_by_id(id: &str) -> Option<Team> {
    TEAMS.iter().find(|t| t.id == id).copied()
}

pub fn teams_by_league(league: League) -> Vec<Team> {
    TEAMS.iter().filter(|t| t.league == league).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_registry_has_twelve_unique_teams() {
        assert_eq!(all_teams().len(), 12);
        assert!(TEAMS.iter().map(|t| t.id).all_unique());
        for team in all_teams() {
            assert!(!team.name.is_empty());
            assert!(!team.full_name.is_empty());
            assert!(team.roster_url.ends_with(&format!("rst_{}.html", team.id)));
        }
    }

    #[test]
    fn test_teams_by_league() {
        let central = teams_by_league(League::Central);
        let pacific = teams_by_league(League::Pacific);
        assert_eq!(central.len(), 6);
        assert_eq!(pacific.len(), 6);
        assert!(central.iter().all(|t| t.league == League::Central));
    }

    #[test]
    fn test_team_by_id() {
        assert_eq!(team_by_id("db").unwrap().full_name, "横浜DeNAベイスターズ");
        assert!(team_by_id("x").is_none());
    }

    #[test]
    fn test_league_from_str() {
        assert_eq!("central".parse::<League>().unwrap(), League::Central);
        assert_eq!(League::Pacific.to_string(), "pacific");
        assert!("minors".parse::<League>().is_err());
    }
}
