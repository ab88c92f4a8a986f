//! Player documents as they are stored in the `players` collection.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Team a player belongs to. Embedded in every [`Player`] document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub conference: String,
    pub division: String,
    pub city: String,
    pub name: String,
    pub full_name: String,
    pub abbreviation: String,
}

/// Per-season averages for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonAverage {
    pub player_id: i64,
    pub season: i32,
    pub games_played: i32,
    pub pts: f64,
    pub ast: f64,
    pub reb: f64,
    pub stl: f64,
    pub blk: f64,
    pub turnover: f64,
    /// Minutes per game as `mm:ss`.
    pub min: String,
    pub fgm: f64,
    pub fga: f64,
    pub fg_pct: f64,
    pub fg3m: f64,
    pub fg3a: f64,
    pub fg3_pct: f64,
    pub ftm: f64,
    pub fta: f64,
    pub ft_pct: f64,
    pub oreb: f64,
    pub dreb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_round: Option<i32>,
    /// Stored as a number or as its decimal text; always served as a number.
    #[serde(
        default,
        deserialize_with = "int_or_numeric_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub draft_year: Option<i32>,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub team: Team,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Store order, not sorted by season.
    #[serde(default)]
    pub season_averages: Vec<SeasonAverage>,
}

fn int_or_numeric_text<'de, D>(de: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i32),
        Text(String),
    }

    match Option::<Raw>::deserialize(de)? {
        None => Ok(None),
        Some(Raw::Int(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .parse()
            .map(Some)
            .map_err(|_| {
                <D::Error as de::Error>::custom(format!("draft_year {s:?} is not a year"))
            }),
    }
}

/// Name-only projection served by `/player-names`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerName {
    pub first_name: String,
    pub last_name: String,
}
