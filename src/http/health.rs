//! Simple liveness / readiness probe

use actix_web::{get, web, HttpResponse, Responder};

use crate::db::PlayerStore;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Hello")
}

#[get("/healthz")]
pub async fn healthz(store: web::Data<dyn PlayerStore>) -> impl Responder {
    if let Err(e) = store.ping().await {
        log::warn!("health check failed: {e}");
        return HttpResponse::ServiceUnavailable().body("db");
    }

    HttpResponse::Ok().body("ok")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(healthz);
}
