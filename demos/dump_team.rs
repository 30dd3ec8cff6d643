use npb_scraper::{NpbClient, Position};

#[tokio::main]
async fn main() {
    let team_id = std::env::args().nth(1).unwrap_or_else(|| "db".to_string());
    let client = NpbClient::new();

    let roster = client.get_team_players(&team_id).await.unwrap();
    println!("{} ({})", roster.team.full_name, roster.team.league);
    for position in [
        Position::Pitcher,
        Position::Catcher,
        Position::Infielder,
        Position::Outfielder,
    ] {
        let count = roster.players.iter().filter(|p| p.position == position).count();
        println!("  {position}: {count}");
    }

    let Some(player_id) = roster.players.iter().find_map(|p| p.player_id.clone()) else {
        println!("no player links on roster page");
        return;
    };
    let details = client.get_player_details(&player_id).await.unwrap();
    println!("{}", serde_json::to_string_pretty(&details).unwrap());
}
