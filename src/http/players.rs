//! Player lookups and listings.

use actix_web::{get, http::StatusCode, web, HttpResponse};

use crate::db::PlayerStore;
use crate::error::ApiError;
use crate::http::response::json_response;
use crate::query::{
    self, DraftParams, IdParams, ListParams, NameParams, PositionParams, TeamParams,
};

/// GET /player?first_name=..&last_name=..
///
/// Answers 202 rather than 200; clients already depend on it.
#[get("/player")]
pub async fn fetch_player(
    store: web::Data<dyn PlayerStore>,
    web::Query(params): web::Query<NameParams>,
) -> Result<HttpResponse, ApiError> {
    let filter = query::by_name(&params)?;
    let player = store
        .find_one(&filter)
        .await
        .map_err(ApiError::store("player"))?
        .ok_or(ApiError::NotFound("could not find player in database"))?;

    Ok(json_response(StatusCode::ACCEPTED, &player))
}

/// GET /players with optional team, position, country, draft_year
#[get("/players")]
pub async fn list_players(
    store: web::Data<dyn PlayerStore>,
    web::Query(params): web::Query<ListParams>,
) -> Result<HttpResponse, ApiError> {
    let players = store
        .find(&query::listing(&params))
        .await
        .map_err(ApiError::store("players"))?;

    Ok(json_response(StatusCode::OK, &players))
}

/// GET /player-names
#[get("/player-names")]
pub async fn list_player_names(
    store: web::Data<dyn PlayerStore>,
) -> Result<HttpResponse, ApiError> {
    let names = store
        .find_names()
        .await
        .map_err(ApiError::store("player names"))?;

    Ok(json_response(StatusCode::OK, &names))
}

/// GET /player/id?id=..
#[get("/player/id")]
pub async fn player_by_id(
    store: web::Data<dyn PlayerStore>,
    web::Query(params): web::Query<IdParams>,
) -> Result<HttpResponse, ApiError> {
    let filter = query::by_id(&params)?;
    let player = store
        .find_one(&filter)
        .await
        .map_err(ApiError::store("player"))?
        .ok_or(ApiError::NotFound("Player not found"))?;

    Ok(json_response(StatusCode::OK, &player))
}

#[get("/players/position")]
pub async fn players_by_position(
    store: web::Data<dyn PlayerStore>,
    web::Query(params): web::Query<PositionParams>,
) -> Result<HttpResponse, ApiError> {
    scan(store.get_ref(), query::by_position(&params)?).await
}

#[get("/players/team")]
pub async fn players_by_team(
    store: web::Data<dyn PlayerStore>,
    web::Query(params): web::Query<TeamParams>,
) -> Result<HttpResponse, ApiError> {
    scan(store.get_ref(), query::by_team(&params)?).await
}

#[get("/players/drafted")]
pub async fn players_drafted(
    store: web::Data<dyn PlayerStore>,
    web::Query(params): web::Query<DraftParams>,
) -> Result<HttpResponse, ApiError> {
    scan(store.get_ref(), query::drafted(&params)?).await
}

async fn scan(store: &dyn PlayerStore, filter: query::Filter) -> Result<HttpResponse, ApiError> {
    let players = store
        .find(&filter)
        .await
        .map_err(ApiError::store("players"))?;
    Ok(json_response(StatusCode::OK, &players))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(fetch_player)
        .service(list_players)
        .service(list_player_names)
        .service(player_by_id)
        .service(players_by_position)
        .service(players_by_team)
        .service(players_drafted);
}
