//! Scraper for Nippon Professional Baseball team rosters and player pages on
//! [npb.jp](https://npb.jp).
//!
//! Start with [`NpbClient`]; the `parse_*` functions work on HTML you already
//! have.

pub use cache::TtlCache;
pub use client::NpbClient;
pub use config::ClientConfig;
pub use error::{NpbError, Result};
pub use model::*;
pub use name::{matches_name, matches_player_name, normalize_name};
pub use npb_scraper::parse_number;
pub use npb_scraper::player::parse_player_details_html;
pub use npb_scraper::roster::parse_roster_html;
pub use teams::{all_teams, team_by_id, teams_by_league};

pub mod cache;
mod client;
mod config;
mod error;
pub mod model;
pub mod name;
mod npb_scraper;
pub mod teams;
