use futures::future::join_all;
use tracing::{debug, instrument, warn};

use crate::cache::TtlCache;
use crate::config::ClientConfig;
use crate::error::{NpbError, Result};
use crate::model::*;
use crate::npb_scraper;
use crate::npb_scraper::is_digits;
use crate::teams;

/// The main entry point for reading rosters and player pages from npb.jp.
///
/// `NpbClient` wraps a [`reqwest::Client`] and keeps fetched rosters and
/// player details in in-memory TTL caches.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> npb_scraper::Result<()> {
/// use npb_scraper::NpbClient;
///
/// let client = NpbClient::new();
/// let roster = client.get_team_players("db").await?;
/// println!("{} has {} players", roster.team.full_name, roster.players.len());
/// # Ok(())
/// # }
/// ```
pub struct NpbClient {
    http: reqwest::Client,
    rosters: TtlCache<TeamRoster>,
    details: TtlCache<PlayerDetails>,
}

impl NpbClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_config_or_plain(ClientConfig::default())
    }

    /// Like [`NpbClient::with_config`], but a client that cannot be built
    /// from `config` is replaced by a plain [`reqwest::Client`]. The cache
    /// lifetimes from `config` are kept either way.
    fn with_config_or_plain(config: ClientConfig) -> Self {
        let http = config.build_http_client().unwrap_or_else(|err| {
            warn!(error = %err, "failed to build configured http client, using defaults");
            reqwest::Client::new()
        });
        Self {
            http,
            rosters: TtlCache::new(config.roster_ttl),
            details: TtlCache::new(config.details_ttl),
        }
    }

    /// Create a client whose HTTP layer is built from `config`.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: config.build_http_client()?,
            rosters: TtlCache::new(config.roster_ttl),
            details: TtlCache::new(config.details_ttl),
        })
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Cache lifetimes fall back to the [`ClientConfig`] defaults.
    pub fn with_client(client: reqwest::Client) -> Self {
        let config = ClientConfig::default();
        Self {
            http: client,
            rosters: TtlCache::new(config.roster_ttl),
            details: TtlCache::new(config.details_ttl),
        }
    }

    /// List registered teams, optionally restricted to one league.
    pub fn list_teams(&self, league: Option<League>) -> Vec<Team> {
        match league {
            Some(league) => teams::teams_by_league(league),
            None => teams::all_teams().to_vec(),
        }
    }

    /// Fetch the current roster of a team by its registry id.
    #[instrument(skip(self))]
    pub async fn get_team_players(&self, team_id: &str) -> Result<TeamRoster> {
        let team = teams::team_by_id(team_id)
            .ok_or_else(|| NpbError::TeamNotFound(team_id.to_string()))?;

        let key = format!("roster:{team_id}");
        if let Some(roster) = self.rosters.get(&key) {
            debug!(team_id, "roster served from cache");
            return Ok(roster);
        }

        let roster = npb_scraper::roster::get_team_roster(&self.http, team).await?;
        self.rosters.set(key, roster.clone(), None);
        Ok(roster)
    }

    /// Fetch every given team's roster concurrently.
    ///
    /// Teams that fail are logged and left out; the rest keep input order.
    #[instrument(skip_all, fields(teams = teams.len()))]
    pub async fn get_all_players(&self, teams: &[Team]) -> Vec<TeamRoster> {
        let results = join_all(teams.iter().map(|team| self.get_team_players(team.id))).await;

        teams
            .iter()
            .zip(results)
            .filter_map(|(team, result)| match result {
                Ok(roster) => Some(roster),
                Err(err) => {
                    warn!(team_id = team.id, error = %err, "failed to fetch roster");
                    None
                }
            })
            .collect()
    }

    /// Search rosters for players matching every set field of `query`.
    ///
    /// A team filter limits fetching to that team; otherwise all twelve
    /// rosters are consulted.
    #[instrument(skip(self))]
    pub async fn search_players(&self, query: &PlayerQuery) -> Result<Vec<Player>> {
        let rosters = match query.team_id.as_deref() {
            Some(team_id) => vec![self.get_team_players(team_id).await?],
            None => self.get_all_players(teams::all_teams()).await,
        };

        let players: Vec<Player> = rosters
            .into_iter()
            .flat_map(|roster| roster.players)
            .filter(|player| query.matches(player))
            .collect();
        debug!(matches = players.len(), "player search finished");
        Ok(players)
    }

    /// Fetch profile, season stats and inferred transfers for a player.
    ///
    /// `player_id` must be the eight-digit identifier used in npb.jp URLs.
    #[instrument(skip(self))]
    pub async fn get_player_details(&self, player_id: &str) -> Result<PlayerDetails> {
        if !is_digits(player_id, 8) {
            return Err(NpbError::InvalidPlayerId(player_id.to_string()));
        }

        let key = format!("player-details:{player_id}");
        if let Some(details) = self.details.get(&key) {
            debug!(player_id, "player details served from cache");
            return Ok(details);
        }

        let details = npb_scraper::player::get_player_details(&self.http, player_id)
            .await
            .map_err(|err| NpbError::PlayerDetails {
                player_id: player_id.to_string(),
                source: Box::new(err),
            })?;
        self.details.set(key, details.clone(), None);
        Ok(details)
    }
}

impl Default for NpbClient {
    fn default() -> Self {
        Self::new()
    }
}
