use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::Result;
use crate::model::PlayerProfile;
use crate::npb_scraper::element_text;

const POSITIONS: [&str; 4] = ["投手", "捕手", "内野手", "外野手"];
const EARLIEST_DRAFT: u16 = 1965;
const LATEST_DRAFT: u16 = 2100;

/// Patterns for the loosely laid out profile block.
struct ProfilePatterns {
    kana: Regex,
    uniform_number: Regex,
    hands: Regex,
    body: Regex,
    birth_date: Regex,
    draft_year: Regex,
}

impl ProfilePatterns {
    fn new() -> Result<Self> {
        Ok(Self {
            kana: Regex::new(r"^[ぁ-ん・]+$")?,
            uniform_number: Regex::new(r"^\d{1,3}$")?,
            hands: Regex::new(r"([左右両])投([左右両])打")?,
            body: Regex::new(r"(\d+)cm[／/](\d+)kg")?,
            birth_date: Regex::new(r"\d{4}年\d{1,2}月\d{1,2}日")?,
            draft_year: Regex::new(r"(\d{4})年ドラフト")?,
        })
    }
}

/// Extract profile facts from a player detail page.
///
/// Every row and list item is tested against each pattern independently, so
/// the facts may appear in any order. Later matches overwrite earlier ones,
/// except for the career line where the first match is kept.
pub(crate) fn parse_profile(document: &Html, player_id: &str) -> Result<PlayerProfile> {
    let patterns = ProfilePatterns::new()?;
    let name_selector = Selector::parse("h1")?;
    let item_selector = Selector::parse("table tr, dl dd, .playerInfo li")?;
    let title_selector = Selector::parse("title")?;

    let mut profile = PlayerProfile {
        player_id: player_id.to_string(),
        name: document
            .select(&name_selector)
            .next()
            .map(|h| element_text(&h))
            .unwrap_or_default(),
        ..Default::default()
    };

    for item in document.select(&item_selector) {
        apply_profile_text(&mut profile, &element_text(&item), &patterns);
    }

    // "東　克樹 | 横浜DeNAベイスターズ"
    profile.team = document
        .select(&title_selector)
        .next()
        .map(|t| t.text().collect::<String>())
        .and_then(|title| title.split('|').nth(1).map(|s| s.trim().to_string()))
        .unwrap_or_default();

    debug!(
        player_id,
        name = %profile.name,
        team = %profile.team,
        "parsed player profile"
    );
    Ok(profile)
}

fn apply_profile_text(profile: &mut PlayerProfile, text: &str, patterns: &ProfilePatterns) {
    if patterns.kana.is_match(text) {
        profile.name_kana = Some(text.to_string());
    }

    if patterns.uniform_number.is_match(text) {
        profile.uniform_number = text.to_string();
    }

    if let Some(position) = POSITIONS.iter().find(|p| **p == text) {
        profile.position = position.to_string();
    }

    if text.contains('投') && text.contains('打') {
        if let Some(caps) = patterns.hands.captures(text) {
            profile.throwing_hand = caps[1].to_string();
            profile.batting_hand = caps[2].to_string();
        }
    }

    if text.contains("cm") && text.contains("kg") {
        if let Some(caps) = patterns.body.captures(text) {
            profile.height = format!("{}cm", &caps[1]);
            profile.weight = format!("{}kg", &caps[2]);
        }
    }

    if patterns.birth_date.is_match(text) {
        profile.birth_date = text.to_string();
    }

    // Schooling line, e.g. "愛工大名電高→立命館大"
    if (text.contains('高') || text.contains('大')) && profile.career.is_none() {
        profile.career = Some(text.to_string());
    }

    if text.contains("ドラフト") {
        profile.draft_info = Some(text.to_string());
        if let Some(year) = patterns
            .draft_year
            .captures(text)
            .and_then(|caps| caps[1].parse::<u16>().ok())
            .filter(|year| (EARLIEST_DRAFT..=LATEST_DRAFT).contains(year))
        {
            profile.joined_year = Some(year);
        }
    }
}
