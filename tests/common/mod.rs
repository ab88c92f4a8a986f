//! Shared fixtures for the HTTP integration tests.
#![allow(dead_code)]

use actix_web::web;
use nba_stats_server::db::{MemoryStore, PlayerStore};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn team(id: i64, city: &str, name: &str, abbr: &str, conference: &str) -> Value {
    json!({
        "id": id,
        "conference": conference,
        "division": "Some Division",
        "city": city,
        "name": name,
        "full_name": format!("{city} {name}"),
        "abbreviation": abbr,
    })
}

pub fn season(player_id: i64, season: i32, pts: f64) -> Value {
    json!({
        "player_id": player_id, "season": season, "games_played": 70,
        "pts": pts, "ast": 5.1, "reb": 6.2, "stl": 1.1, "blk": 0.4,
        "turnover": 2.3, "min": "34:12",
        "fgm": 9.0, "fga": 18.5, "fg_pct": 0.486,
        "fg3m": 2.1, "fg3a": 5.8, "fg3_pct": 0.362,
        "ftm": 4.4, "fta": 5.2, "ft_pct": 0.846,
        "oreb": 1.0, "dreb": 5.2
    })
}

/// Five players across three teams. Ids 1..=5.
pub fn roster() -> Vec<Value> {
    let lakers = team(14, "Los Angeles", "Lakers", "LAL", "West");
    let celtics = team(2, "Boston", "Celtics", "BOS", "East");
    let nuggets = team(8, "Denver", "Nuggets", "DEN", "West");

    vec![
        json!({
            "id": 1, "first_name": "LeBron", "last_name": "James",
            "college": null, "country": "USA",
            "draft_number": 1, "draft_round": 1, "draft_year": 2003,
            "height": "6-9", "jersey_number": "23", "position": "F",
            "team": lakers.clone(), "team_id": 14, "weight": "250",
            "season_averages": [season(1, 2022, 28.9), season(1, 2023, 25.7)]
        }),
        json!({
            "id": 2, "first_name": "Anthony", "last_name": "Davis",
            "college": "Kentucky", "country": "USA",
            "draft_number": 1, "draft_round": 1, "draft_year": 2012,
            "position": "F-C", "team": lakers, "team_id": 14,
            "season_averages": []
        }),
        json!({
            "id": 3, "first_name": "Jayson", "last_name": "Tatum",
            "country": "USA", "draft_year": 2017, "position": "F",
            "team": celtics.clone()
        }),
        json!({
            "id": 4, "first_name": "Jrue", "last_name": "Holiday",
            "country": "USA", "draft_year": 2009, "position": "G",
            "team": celtics
        }),
        json!({
            "id": 5, "first_name": "Nikola", "last_name": "Jokic",
            "country": "Serbia", "draft_year": 2014, "position": "C",
            "team": nuggets
        }),
    ]
}

pub fn store_with(docs: Vec<Value>) -> web::Data<dyn PlayerStore> {
    let store: Arc<dyn PlayerStore> = Arc::new(MemoryStore::new(docs));
    web::Data::from(store)
}

pub fn roster_store() -> web::Data<dyn PlayerStore> {
    store_with(roster())
}
