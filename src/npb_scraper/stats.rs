use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::Result;
use crate::model::{BattingCareer, BattingStats, PitchingCareer, PitchingStats};
use crate::npb_scraper::{element_text, is_digits, parse_number};

const PITCHING_KEYWORDS: [&str; 3] = ["防御率", "勝利", "登板"];
const BATTING_KEYWORDS: [&str; 3] = ["打率", "安打", "打席"];
/// Header words that only a pitching table carries.
const PITCHING_ONLY_KEYWORDS: [&str; 2] = ["防御率", "勝利"];
const CAREER_MARK: char = '通';

/// What a stats table on a player page holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableKind {
    Pitching,
    Batting,
    Unrelated,
}

/// Classify a table by the concatenated text of its header cells.
pub(crate) fn classify_table(header_text: &str) -> TableKind {
    let has = |words: &[&str]| words.iter().any(|w| header_text.contains(w));
    if has(&PITCHING_KEYWORDS) {
        TableKind::Pitching
    } else if has(&BATTING_KEYWORDS) && !has(&PITCHING_ONLY_KEYWORDS) {
        TableKind::Batting
    } else {
        TableKind::Unrelated
    }
}

/// Season rows plus the optional career-total row of one stat kind.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StatSeries<S, C> {
    pub(crate) seasons: Vec<S>,
    pub(crate) career: Option<C>,
}

impl<S, C> Default for StatSeries<S, C> {
    fn default() -> Self {
        Self {
            seasons: Vec::new(),
            career: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct StatTables {
    pub(crate) pitching: StatSeries<PitchingStats, PitchingCareer>,
    pub(crate) batting: StatSeries<BattingStats, BattingCareer>,
}

/// Header text to column index, built from a table's first row.
#[derive(Debug, Default)]
struct ColumnMap(HashMap<String, usize>);

impl ColumnMap {
    fn from_header(cells: &[String]) -> Self {
        Self(
            cells
                .iter()
                .enumerate()
                .filter(|(_, text)| !text.is_empty())
                .map(|(i, text)| (text.clone(), i))
                .collect(),
        )
    }

    /// Index for `header` in a row of `len` cells, else `fallback` if it fits.
    fn resolve(&self, header: &str, fallback: usize, len: usize) -> Option<usize> {
        self.0
            .get(header)
            .copied()
            .filter(|&i| i < len)
            .or_else(|| (fallback < len).then_some(fallback))
    }
}

/// One data row read through a table's [`ColumnMap`].
struct StatRow<'a> {
    cells: &'a [String],
    columns: &'a ColumnMap,
}

impl StatRow<'_> {
    fn cell(&self, header: &str, fallback: usize) -> Option<&str> {
        self.columns
            .resolve(header, fallback, self.cells.len())
            .map(|i| self.cells[i].as_str())
    }

    fn text(&self, header: &str, fallback: usize) -> String {
        self.cell(header, fallback).unwrap_or_default().to_string()
    }

    fn number(&self, header: &str, fallback: usize) -> f64 {
        self.cell(header, fallback).map_or(0.0, parse_number)
    }

    /// Like [`Self::number`], joining a following fraction-only cell
    /// (`"147"` + `".1"`).
    fn number_with_fraction(&self, header: &str, fallback: usize) -> f64 {
        let Some(i) = self.columns.resolve(header, fallback, self.cells.len()) else {
            return 0.0;
        };
        match self.cells.get(i + 1).filter(|next| is_fraction(next)) {
            Some(fraction) => parse_number(&format!("{}{}", self.cells[i], fraction)),
            None => parse_number(&self.cells[i]),
        }
    }

    /// Mapped column, or the row's last cell when the header is missing.
    fn number_or_last(&self, header: &str) -> f64 {
        let len = self.cells.len();
        len.checked_sub(1)
            .and_then(|last| self.columns.resolve(header, last, len))
            .map_or(0.0, |i| parse_number(&self.cells[i]))
    }
}

fn is_fraction(text: &str) -> bool {
    text.strip_prefix('.')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

enum RowClass<'a> {
    Career,
    Season(&'a str),
    Other,
}

fn classify_row(first_cell: &str) -> RowClass<'_> {
    if first_cell.contains(CAREER_MARK) {
        RowClass::Career
    } else if is_digits(first_cell, 4) {
        RowClass::Season(first_cell)
    } else {
        RowClass::Other
    }
}

/// Extract pitching and batting tables from a player detail page.
///
/// Season rows are appended in document order across all matching tables;
/// a later career row replaces an earlier one of the same kind.
pub(crate) fn parse_stat_tables(document: &Html) -> Result<StatTables> {
    let table_selector = Selector::parse("table")?;
    let th_selector = Selector::parse("th")?;
    let row_selector = Selector::parse("tr")?;
    let header_cell_selector = Selector::parse("th, td")?;
    let td_selector = Selector::parse("td")?;

    let mut tables = StatTables::default();

    for table in document.select(&table_selector) {
        let header_text: String = table.select(&th_selector).flat_map(|th| th.text()).collect();
        let kind = classify_table(&header_text);
        if kind == TableKind::Unrelated {
            continue;
        }

        let columns = table
            .select(&row_selector)
            .next()
            .map(|row| ColumnMap::from_header(&row_texts(&row, &header_cell_selector)))
            .unwrap_or_default();

        for row in table.select(&row_selector) {
            let cells = row_texts(&row, &td_selector);
            let Some(first) = cells.first() else {
                continue;
            };
            let stat_row = StatRow {
                cells: &cells,
                columns: &columns,
            };

            match (kind, classify_row(first)) {
                (TableKind::Pitching, RowClass::Career) => {
                    tables.pitching.career = Some(pitching_career(&stat_row));
                }
                (TableKind::Pitching, RowClass::Season(year)) => {
                    tables.pitching.seasons.push(pitching_season(year, &stat_row));
                }
                (TableKind::Batting, RowClass::Career) => {
                    tables.batting.career = Some(batting_career(&stat_row));
                }
                (TableKind::Batting, RowClass::Season(year)) => {
                    tables.batting.seasons.push(batting_season(year, &stat_row));
                }
                _ => {}
            }
        }
    }

    debug!(
        pitching = tables.pitching.seasons.len(),
        batting = tables.batting.seasons.len(),
        "parsed stat tables"
    );
    Ok(tables)
}

fn row_texts(row: &ElementRef, cell_selector: &Selector) -> Vec<String> {
    row.select(cell_selector).map(|c| element_text(&c)).collect()
}

fn pitching_season(year: &str, row: &StatRow) -> PitchingStats {
    let mut stat = PitchingStats {
        year: year.to_string(),
        team: row.text("所属球団", 1),
        games: row.number("登板", 2),
        wins: row.number("勝利", 3),
        losses: row.number("敗北", 4),
        saves: row.number("セーブ", 5),
        holds: row.number("H", 6),
        hp: row.number("HP", 7),
        complete_games: row.number("完投", 8),
        shutouts: row.number("完封勝", 9),
        no_walks: row.number("無四球", 10),
        winning_percentage: row.number("勝率", 11),
        batters: row.number("打者", 12),
        innings: row.number_with_fraction("投球回", 13),
        hits: row.number_with_fraction("安打", 14),
        home_runs: row.number("本塁打", 15),
        walks: row.number("四球", 16),
        strikeouts_per9: row.number("奪三振率", 17),
        hit_by_pitch: row.number("死球", 17),
        strikeouts: row.number("三振", 18),
        wild_pitches: row.number("暴投", 19),
        balks: row.number("ボーク", 20),
        runs_allowed: row.number("失点", 21),
        earned_runs: row.number("自責点", 22),
        era: row.number_or_last("防御率"),
        ..Default::default()
    };
    stat.derive_rates();
    stat
}

fn pitching_career(row: &StatRow) -> PitchingCareer {
    PitchingCareer {
        games: row.number("登板", 2),
        wins: row.number("勝利", 3),
        losses: row.number("敗北", 4),
        saves: row.number("セーブ", 5),
        holds: row.number("H", 6),
        era: row.cells.last().map_or(0.0, |c| parse_number(c)),
    }
}

fn batting_season(year: &str, row: &StatRow) -> BattingStats {
    let mut stat = BattingStats {
        year: year.to_string(),
        team: row.text("所属球団", 1),
        games: row.number("試合", 2),
        plate_appearances: row.number("打席", 3),
        at_bats: row.number("打数", 4),
        runs: row.number("得点", 5),
        hits: row.number("安打", 6),
        doubles: row.number("二塁打", 7),
        triples: row.number("三塁打", 8),
        home_runs: row.number("本塁打", 9),
        total_bases: row.number("塁打", 10),
        rbi: row.number("打点", 11),
        stolen_bases: row.number("盗塁", 12),
        caught_stealing: row.number("盗塁死", 13),
        sacrifice_hits: row.number("犠打", 14),
        sacrifice_flies: row.number("犠飛", 15),
        walks: row.number("四球", 16),
        intentional_walks: row.number("敬遠", 17),
        hit_by_pitch: row.number("死球", 18),
        strikeouts: row.number("三振", 19),
        grounded_into_double_plays: row.number("併殺打", 20),
        average: row.number("打率", 21),
        on_base_percentage: row.number("出塁率", 22),
        slugging_percentage: row.number("長打率", 23),
        ops: row.number("OPS", 24),
        ..Default::default()
    };
    stat.derive_rates();
    stat
}

fn batting_career(row: &StatRow) -> BattingCareer {
    BattingCareer {
        games: row.number("試合", 2),
        plate_appearances: row.number("打席", 3),
        at_bats: row.number("打数", 4),
        hits: row.number("安打", 6),
        average: row.number("打率", 21),
    }
}
