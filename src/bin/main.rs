use actix_web::{middleware::Logger, web, App, HttpServer};
use nba_stats_server::config::Settings;
use nba_stats_server::db::{PgPlayerStore, PlayerStore};
use nba_stats_server::http;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration; a missing DATABASE_URL stops us here
    let settings = Settings::from_env()?;

    // One store handle for the whole process, shared by every worker
    let store: Arc<dyn PlayerStore> = Arc::new(PgPlayerStore::connect(&settings).await?);
    log::info!("connected to player store");
    let store = web::Data::from(store);

    log::info!("listening on {}", settings.server_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&settings.server_addr)?
    .run()
    .await?;

    Ok(())
}
