//! Season averages for a single player.

use actix_web::{get, http::StatusCode, web, HttpResponse};

use crate::db::PlayerStore;
use crate::error::ApiError;
use crate::http::response::json_response;
use crate::query::{self, AveragesParams};

/// GET /averages?player_id=..
///
/// Reads the player document and returns only its `season_averages`;
/// a player with no recorded seasons yields `[]`.
#[get("/averages")]
pub async fn season_averages(
    store: web::Data<dyn PlayerStore>,
    web::Query(params): web::Query<AveragesParams>,
) -> Result<HttpResponse, ApiError> {
    let filter = query::by_player_id(&params)?;
    let player = store
        .find_one(&filter)
        .await
        .map_err(ApiError::store("player"))?
        .ok_or(ApiError::NotFound("Player not found"))?;

    Ok(json_response(StatusCode::OK, &player.season_averages))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(season_averages);
}
