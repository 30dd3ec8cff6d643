use chrono::Utc;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{Hand, Player, PlayerCategory, Position, Team, TeamRoster};
use crate::npb_scraper::{self, element_text, is_digits, parse_leading_int};

const DEVELOPMENT_MARK: &str = "育成";
const REGISTERED_MARK: &str = "支配下";
const STAFF_MARKS: [&str; 2] = ["監督", "コーチ"];
const PLAYER_LINK_PATTERN: &str = r"/bis/players/(\d{8})\.html";
/// Ancestor levels searched for a category heading above a table.
const HEADING_SEARCH_DEPTH: usize = 5;
const MIN_PLAYER_CELLS: usize = 7;

#[instrument(skip(client, team), fields(team_id = team.id))]
pub(crate) async fn get_team_roster(client: &reqwest::Client, team: Team) -> Result<TeamRoster> {
    let document = npb_scraper::get_document(client, team.roster_url).await?;
    let players = parse_roster(&document, team.id)?;
    debug!(count = players.len(), team_id = team.id, "parsed team roster");
    Ok(TeamRoster {
        team,
        players,
        last_updated: Utc::now(),
    })
}

/// Extract every player row from a team roster page.
///
/// Records come out in document order. Rows without a numeric height and
/// weight (managers, headers, spacers) produce nothing.
pub fn parse_roster_html(html: &str, team_id: &str) -> Result<Vec<Player>> {
    parse_roster(&Html::parse_document(html), team_id)
}

pub(crate) fn parse_roster(document: &Html, team_id: &str) -> Result<Vec<Player>> {
    let marked_selector = Selector::parse("table.rosterlisttbl")?;
    let table_selector = Selector::parse("table")?;
    let row_selector = Selector::parse("tr")?;
    let cell_selector = Selector::parse("td, th")?;
    let td_selector = Selector::parse("td")?;
    let link_selector = Selector::parse("a[href]")?;
    let heading_selector = Selector::parse("h2, h3, h4")?;
    let player_link = Regex::new(PLAYER_LINK_PATTERN)?;

    let mut tables: Vec<ElementRef> = document.select(&marked_selector).collect();
    if tables.is_empty() {
        tables = document.select(&table_selector).collect();
    }

    let mut players = Vec::new();
    for table in tables {
        let category = table_category(&table, &heading_selector, &row_selector, &td_selector);
        let mut position = Position::default();

        for row in table.select(&row_selector) {
            let cells: Vec<String> = row
                .select(&cell_selector)
                .map(|c| element_text(&c))
                .collect();
            let row_text: String = row.text().collect();

            match classify_row(&cells, &row_text) {
                RowKind::PositionHeader(next) => position = next,
                RowKind::Skip => {}
                RowKind::Data => {
                    if let Some(player) = parse_player_row(
                        &row,
                        &td_selector,
                        &link_selector,
                        &player_link,
                        position,
                        category,
                        team_id,
                    ) {
                        players.push(player);
                    }
                }
            }
        }
    }

    Ok(players)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    /// Switches the running position for the rows that follow.
    PositionHeader(Position),
    Skip,
    Data,
}

fn classify_row(cells: &[String], row_text: &str) -> RowKind {
    if cells.len() < MIN_PLAYER_CELLS {
        return Position::find_in(row_text).map_or(RowKind::Skip, RowKind::PositionHeader);
    }

    // "No. | 投手 | 生年月日 | ..." style header inside the table body
    if cells[0].contains("No.") {
        if let Some(position) = Position::find_in(&cells[1]) {
            return RowKind::PositionHeader(position);
        }
        if STAFF_MARKS.iter().any(|m| cells[1].contains(m)) {
            return RowKind::Skip;
        }
    }

    RowKind::Data
}

fn parse_player_row(
    row: &ElementRef,
    td_selector: &Selector,
    link_selector: &Selector,
    player_link: &Regex,
    position: Position,
    category: PlayerCategory,
    team_id: &str,
) -> Option<Player> {
    let tds: Vec<ElementRef> = row.select(td_selector).collect();
    if tds.len() < MIN_PLAYER_CELLS {
        return None;
    }

    let height = parse_leading_int(&element_text(&tds[3]))?;
    let weight = parse_leading_int(&element_text(&tds[4]))?;

    let note = tds
        .get(7)
        .map(element_text)
        .filter(|text| !text.is_empty());

    let player_id = tds[1]
        .select(link_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| player_link.captures(href))
        .map(|caps| caps[1].to_string());

    Some(Player {
        number: element_text(&tds[0]),
        name: element_text(&tds[1]),
        name_kana: None,
        birth_date: element_text(&tds[2]),
        height,
        weight,
        pitching_hand: Hand::from_cell(&element_text(&tds[5])),
        batting_hand: Hand::from_cell(&element_text(&tds[6])),
        position,
        category,
        note,
        team_id: team_id.to_string(),
        player_id,
    })
}

/// Decide whether a table lists registered or development players.
fn table_category(
    table: &ElementRef,
    heading_selector: &Selector,
    row_selector: &Selector,
    td_selector: &Selector,
) -> PlayerCategory {
    // 1. Nearest heading among the table's preceding siblings
    let sibling_heading = table
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| matches!(e.value().name(), "h2" | "h3" | "h4"));
    if let Some(category) = sibling_heading.and_then(|h| category_from_heading(&element_text(&h)))
    {
        return category;
    }

    // 2. A heading elsewhere inside an ancestor, before the table in document order
    let ancestor_heading = table
        .ancestors()
        .filter_map(ElementRef::wrap)
        .take(HEADING_SEARCH_DEPTH)
        .find_map(|ancestor| preceding_category_heading(&ancestor, table, heading_selector));
    if let Some(category) = ancestor_heading {
        return category;
    }

    // 3. Development squads wear three-digit numbers
    let three_digit_row = table.select(row_selector).any(|row| {
        let tds: Vec<ElementRef> = row.select(td_selector).collect();
        tds.len() >= 2 && is_digits(&element_text(&tds[0]), 3)
    });
    if three_digit_row {
        PlayerCategory::Development
    } else {
        PlayerCategory::Registered
    }
}

fn category_from_heading(text: &str) -> Option<PlayerCategory> {
    if text.contains(DEVELOPMENT_MARK) {
        Some(PlayerCategory::Development)
    } else if text.contains(REGISTERED_MARK) {
        Some(PlayerCategory::Registered)
    } else {
        None
    }
}

/// Category of the last keyword heading in `ancestor` that comes before `table`.
fn preceding_category_heading(
    ancestor: &ElementRef,
    table: &ElementRef,
    heading_selector: &Selector,
) -> Option<PlayerCategory> {
    let mut found = None;
    for node in ancestor.descendants() {
        if node.id() == table.id() {
            break;
        }
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if heading_selector.matches(&element) {
            if let Some(category) = category_from_heading(&element_text(&element)) {
                found = Some(category);
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_HTML: &str = r#"
<!DOCTYPE html>
<html>
<head><title>横浜DeNAベイスターズ 選手一覧</title></head>
<body>
  <h1>横浜DeNAベイスターズ</h1>
  <h2>2025年度 選手一覧</h2>
  <h3>■ 支配下選手</h3>
  <table class="rosterlisttbl">
    <tr><td>No.</td><td>監督</td><td>生年月日</td><td></td><td>備考</td></tr>
    <tr><td>81</td><td>三浦　大輔</td><td>1973.12.25</td><td></td><td></td></tr>
    <tr><td>No.</td><td>投手</td><td>生年月日</td><td>身長</td><td>体重</td><td>投</td><td>打</td><td>備考</td></tr>
    <tr><td>11</td><td><a href="/bis/players/51155136.html">東　克樹</a></td><td>1995.11.29</td><td>170</td><td>80</td><td>左</td><td>左</td><td></td></tr>
    <tr><td>12</td><td><a href="/bis/players/51234567.html">竹田　祐</a></td><td>1999.07.05</td><td>184</td><td>96</td><td>右</td><td>右</td><td></td></tr>
    <tr><td>No.</td><td>捕手</td><td>生年月日</td><td>身長</td><td>体重</td><td>投</td><td>打</td><td>備考</td></tr>
    <tr><td>2</td><td><a href="/bis/players/52345678.html">戸柱　恭孝</a></td><td>1989.10.20</td><td>178</td><td>88</td><td>右</td><td>右</td><td></td></tr>
    <tr><td>No.</td><td>内野手</td><td>生年月日</td><td>身長</td><td>体重</td><td>投</td><td>打</td><td>備考</td></tr>
    <tr><td>6</td><td><a href="/bis/players/54567890.html">牧　秀悟</a></td><td>1994.11.20</td><td>180</td><td>88</td><td>右</td><td>右</td><td></td></tr>
    <tr><td>25</td><td>大和</td><td>1992.03.15</td><td>175</td><td>75</td><td>右</td><td>両</td><td>新入団</td></tr>
    <tr><td colspan="3">外野手</td></tr>
    <tr><td>7</td><td><a href="/bis/players/56789012.html">佐野　恵太</a></td><td>1994.11.28</td><td>178</td><td>90</td><td>右</td><td>左</td><td></td></tr>
  </table>
  <h3>■ 育成選手</h3>
  <table class="rosterlisttbl">
    <tr><td>No.</td><td>投手</td><td>生年月日</td><td>身長</td><td>体重</td><td>投</td><td>打</td><td>備考</td></tr>
    <tr><td>100</td><td>育成　太郎</td><td>2003.04.01</td><td>181</td><td>78</td><td>?</td><td></td><td></td></tr>
  </table>
</body>
</html>
"#;

    fn roster() -> Vec<Player> {
        parse_roster_html(ROSTER_HTML, "db").unwrap()
    }

    #[test]
    fn test_parse_roster_counts() {
        let players = roster();
        assert_eq!(players.len(), 7);

        let count = |p: Position| players.iter().filter(|x| x.position == p).count();
        assert_eq!(count(Position::Pitcher), 3);
        assert_eq!(count(Position::Catcher), 1);
        assert_eq!(count(Position::Infielder), 2);
        assert_eq!(count(Position::Outfielder), 1);
    }

    #[test]
    fn test_parse_roster_skips_manager() {
        assert!(roster().iter().all(|p| p.name != "三浦　大輔"));
    }

    #[test]
    fn test_parse_roster_player_fields() {
        let players = roster();
        let azuma = &players[0];
        assert_eq!(azuma.number, "11");
        assert_eq!(azuma.name, "東　克樹");
        assert_eq!(azuma.birth_date, "1995.11.29");
        assert_eq!(azuma.height, 170);
        assert_eq!(azuma.weight, 80);
        assert_eq!(azuma.pitching_hand, Hand::Left);
        assert_eq!(azuma.batting_hand, Hand::Left);
        assert_eq!(azuma.position, Position::Pitcher);
        assert_eq!(azuma.category, PlayerCategory::Registered);
        assert_eq!(azuma.team_id, "db");
        assert_eq!(azuma.player_id.as_deref(), Some("51155136"));
        assert_eq!(azuma.note, None);
    }

    #[test]
    fn test_parse_roster_without_link_or_with_note() {
        let players = roster();
        let yamato = players.iter().find(|p| p.name == "大和").unwrap();
        assert_eq!(yamato.player_id, None);
        assert_eq!(yamato.batting_hand, Hand::Both);
        assert_eq!(yamato.note.as_deref(), Some("新入団"));
    }

    #[test]
    fn test_parse_roster_short_position_row() {
        let players = roster();
        let sano = players.iter().find(|p| p.number == "7").unwrap();
        assert_eq!(sano.position, Position::Outfielder);
    }

    #[test]
    fn test_parse_roster_development_heading() {
        let players = roster();
        let dev = players.iter().find(|p| p.number == "100").unwrap();
        assert_eq!(dev.category, PlayerCategory::Development);
        assert_eq!(dev.position, Position::Pitcher);
        assert_eq!(dev.pitching_hand, Hand::Right);
        assert_eq!(dev.batting_hand, Hand::Right);
    }

    #[test]
    fn test_category_from_three_digit_number() {
        let html = r#"<html><body><div><table>
            <tr><td>101</td><td>山田　一郎</td><td>2004.05.05</td><td>176</td><td>70</td><td>右</td><td>右</td></tr>
        </table></div></body></html>"#;
        let players = parse_roster_html(html, "g").unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].category, PlayerCategory::Development);
    }

    #[test]
    fn test_registered_heading_beats_number_width() {
        let html = r#"<html><body><h3>支配下登録選手</h3><table>
            <tr><td>123</td><td>山田　一郎</td><td>2004.05.05</td><td>176</td><td>70</td><td>右</td><td>右</td></tr>
            <tr><td>1</td><td>田中　二郎</td><td>2001.01.01</td><td>180</td><td>82</td><td>左</td><td>左</td></tr>
        </table></body></html>"#;
        let players = parse_roster_html(html, "g").unwrap();
        assert_eq!(players.len(), 2);
        assert!(players
            .iter()
            .all(|p| p.category == PlayerCategory::Registered));
    }

    #[test]
    fn test_category_from_ancestor_heading() {
        let html = r#"<html><body>
            <div><h3>育成選手</h3></div>
            <div><section><table>
                <tr><td>5</td><td>鈴木　三郎</td><td>2002.02.02</td><td>172</td><td>68</td><td>右</td><td>右</td></tr>
            </table></section></div>
        </body></html>"#;
        let players = parse_roster_html(html, "t").unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].category, PlayerCategory::Development);
    }

    /// A development heading in the outer div with `extra` divs between it
    /// and the roster table.
    fn nested_roster(extra: usize, number: &str) -> String {
        format!(
            r#"<html><body><div><h3>育成選手</h3>{}<table>
                <tr><td>{number}</td><td>鈴木　三郎</td><td>2002.02.02</td><td>172</td><td>68</td><td>右</td><td>右</td></tr>
            </table>{}</div></body></html>"#,
            "<div>".repeat(extra),
            "</div>".repeat(extra),
        )
    }

    #[test]
    fn test_ancestor_heading_depth_limit() {
        // heading div is the fifth ancestor
        let players = parse_roster_html(&nested_roster(4, "15"), "t").unwrap();
        assert_eq!(players[0].category, PlayerCategory::Development);

        // sixth ancestor is out of reach
        let players = parse_roster_html(&nested_roster(5, "15"), "t").unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].category, PlayerCategory::Registered);
    }

    #[test]
    fn test_roster_serialization_is_stable() {
        let first = serde_json::to_string(&roster()).unwrap();
        let second = serde_json::to_string(&roster()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains(r#""playerId":"51155136""#));
        assert!(first.contains(r#""pitchingHand":"左""#));
    }

    #[test]
    fn test_heading_after_table_is_ignored() {
        let html = r#"<html><body><div>
            <table>
                <tr><td>5</td><td>鈴木　三郎</td><td>2002.02.02</td><td>172</td><td>68</td><td>右</td><td>右</td></tr>
            </table>
            <h3>育成選手</h3>
        </div></body></html>"#;
        let players = parse_roster_html(html, "t").unwrap();
        assert_eq!(players[0].category, PlayerCategory::Registered);
    }

    #[test]
    fn test_marked_tables_are_preferred() {
        let html = r#"<html><body>
            <table><tr><td>9</td><td>広告</td><td>-</td><td>1</td><td>1</td><td>右</td><td>右</td></tr></table>
            <table class="rosterlisttbl">
                <tr><td>5</td><td>鈴木　三郎</td><td>2002.02.02</td><td>172</td><td>68</td><td>右</td><td>右</td></tr>
            </table>
        </body></html>"#;
        let players = parse_roster_html(html, "t").unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "鈴木　三郎");
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_roster_html("<html><body></body></html>", "g")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_classify_row() {
        let cells = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(
            classify_row(&cells(&["外野手"]), "外野手"),
            RowKind::PositionHeader(Position::Outfielder)
        );
        assert_eq!(classify_row(&cells(&["No.", "監督"]), "No.監督"), RowKind::Skip);
        let header = cells(&["No.", "捕手", "生年月日", "身長", "体重", "投", "打"]);
        assert_eq!(
            classify_row(&header, &header.concat()),
            RowKind::PositionHeader(Position::Catcher)
        );
        let staff = cells(&["No.", "コーチ", "生年月日", "身長", "体重", "投", "打"]);
        assert_eq!(classify_row(&staff, &staff.concat()), RowKind::Skip);
        let data = cells(&["11", "東　克樹", "1995.11.29", "170", "80", "左", "左"]);
        assert_eq!(classify_row(&data, &data.concat()), RowKind::Data);
    }
}
