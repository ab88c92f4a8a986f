//! Postgres-backed player collection.
//!
//! Documents live in a single JSONB column:
//!
//! ```sql
//! CREATE TABLE players (doc JSONB NOT NULL);
//! CREATE INDEX players_doc_idx ON players USING GIN (doc jsonb_path_ops);
//! ```
//!
//! An equality [`Filter`] is sent as one JSONB document and matched with
//! `doc @> $1`, which the GIN index serves.

use super::{PlayerStore, StoreError};
use crate::config::Settings;
use crate::model::{Player, PlayerName};
use crate::query::Filter;
use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;

const FIND_ONE: &str = "SELECT doc FROM players WHERE doc @> $1 LIMIT 1";
const FIND: &str = "SELECT doc FROM players WHERE doc @> $1";
const FIND_NAMES: &str = r#"
    SELECT jsonb_build_object(
               'first_name', doc -> 'first_name',
               'last_name',  doc -> 'last_name'
           )
      FROM players
"#;

#[derive(Clone)]
pub struct PgPlayerStore {
    pool: PgPool,
}

impl PgPlayerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool and ping it, all within `db_connect_timeout`.
    pub async fn connect(settings: &Settings) -> anyhow::Result<Self> {
        let attempt = async {
            let pool = PgPoolOptions::new()
                .max_connections(settings.db_max_connections)
                .acquire_timeout(settings.db_connect_timeout)
                .connect(&settings.database_url)
                .await?;
            sqlx::query("SELECT 1").execute(&pool).await?;
            Ok::<_, sqlx::Error>(pool)
        };

        let pool = tokio::time::timeout(settings.db_connect_timeout, attempt)
            .await
            .context("timed out connecting to Postgres")?
            .context("connecting to Postgres")?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl PlayerStore for PgPlayerStore {
    async fn find_one(&self, filter: &Filter) -> Result<Option<Player>, StoreError> {
        let doc = sqlx::query_scalar::<_, Json<Value>>(FIND_ONE)
            .bind(Json(filter.to_document()))
            .fetch_optional(&self.pool)
            .await?;

        match doc {
            Some(Json(doc)) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    async fn find(&self, filter: &Filter) -> Result<Vec<Player>, StoreError> {
        // The cursor is dropped (and closed) on every return path below.
        let mut rows = sqlx::query_scalar::<_, Json<Value>>(FIND)
            .bind(Json(filter.to_document()))
            .fetch(&self.pool);

        let mut out = Vec::new();
        while let Some(Json(doc)) = rows.try_next().await? {
            out.push(serde_json::from_value(doc)?);
        }
        Ok(out)
    }

    async fn find_names(&self) -> Result<Vec<PlayerName>, StoreError> {
        let mut rows = sqlx::query_scalar::<_, Json<Value>>(FIND_NAMES).fetch(&self.pool);

        let mut out = Vec::new();
        while let Some(Json(doc)) = rows.try_next().await? {
            out.push(serde_json::from_value(doc)?);
        }
        Ok(out)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
