//! Document store access for the `players` collection.
//!
//! Handlers only see [`PlayerStore`]; `main` picks the Postgres backend and
//! the tests run against [`memory::MemoryStore`].

pub mod memory;
pub mod player_repo;

use crate::model::{Player, PlayerName};
use crate::query::Filter;
use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStore;
pub use player_repo::PgPlayerStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection or query failure inside the store.
    #[error("store query failed: {0}")]
    Query(#[from] sqlx::Error),
    /// A stored document did not match the player model.
    #[error("malformed document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only access to player documents by equality filter.
///
/// Multi-record calls materialize the full match set; a single malformed
/// document fails the whole call.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// First match in store order, if any.
    async fn find_one(&self, filter: &Filter) -> Result<Option<Player>, StoreError>;

    async fn find(&self, filter: &Filter) -> Result<Vec<Player>, StoreError>;

    /// First and last name of every player.
    async fn find_names(&self) -> Result<Vec<PlayerName>, StoreError>;

    /// Cheap round-trip used by the health probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
