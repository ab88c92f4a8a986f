use crate::error::ApiError;
use crate::http;
use actix_web::web;

/// Mount every HTTP sub-module at the root.
///
/// Malformed query strings (e.g. a repeated parameter) are answered with the
/// same `{"error": ..}` envelope as every other 400.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .configure(http::players::init_routes)
    .configure(http::averages::init_routes)
    .configure(http::health::init_routes);
}
