use scraper::Html;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::PlayerDetails;
use crate::npb_scraper::stats::{parse_stat_tables, StatTables};
use crate::npb_scraper::{self, profile, transfer, BASE_URL};

/// Fetch and extract a player's detail page.
#[instrument(skip(client))]
pub(crate) async fn get_player_details(
    client: &reqwest::Client,
    player_id: &str,
) -> Result<PlayerDetails> {
    let url = format!("{BASE_URL}/bis/players/{player_id}.html");
    let document = npb_scraper::get_document(client, &url).await?;
    let details = parse_player_details(&document, player_id)?;
    debug!(
        player_id,
        name = %details.profile.name,
        seasons = details.pitching_stats.len() + details.batting_stats.len(),
        transfers = details.transfers.len(),
        "parsed player details"
    );
    Ok(details)
}

/// Extract profile, stats and inferred transfers from a player detail page.
///
/// Any document parses; a page without the expected blocks gives an empty
/// profile and no stats.
pub fn parse_player_details_html(html: &str, player_id: &str) -> Result<PlayerDetails> {
    parse_player_details(&Html::parse_document(html), player_id)
}

#[instrument(skip(document))]
pub(crate) fn parse_player_details(document: &Html, player_id: &str) -> Result<PlayerDetails> {
    let profile = profile::parse_profile(document, player_id)?;
    let StatTables { pitching, batting } = parse_stat_tables(document)?;
    let transfers = transfer::infer_transfers(&pitching.seasons, &batting.seasons);

    Ok(PlayerDetails {
        profile,
        pitching_stats: pitching.seasons,
        batting_stats: batting.seasons,
        career_pitching: pitching.career,
        career_batting: batting.career,
        transfers,
    })
}
