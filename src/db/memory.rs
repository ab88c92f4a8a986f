//! In-process player collection holding raw JSON documents.
//!
//! Applies the same strict equality semantics as the Postgres store and
//! decodes lazily, so a malformed document surfaces exactly like it would
//! from a real cursor.

use super::{PlayerStore, StoreError};
use crate::model::{Player, PlayerName};
use crate::query::Filter;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: Vec<Value>,
}

impl MemoryStore {
    /// Documents are kept in insertion order, which is the scan order.
    pub fn new(docs: Vec<Value>) -> Self {
        Self { docs }
    }

    pub fn from_players<I>(players: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Player>,
    {
        let docs = players
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(docs))
    }
}

#[async_trait]
impl PlayerStore for MemoryStore {
    async fn find_one(&self, filter: &Filter) -> Result<Option<Player>, StoreError> {
        match self.docs.iter().find(|doc| filter.matches(doc)) {
            Some(doc) => Ok(Some(Player::deserialize(doc)?)),
            None => Ok(None),
        }
    }

    async fn find(&self, filter: &Filter) -> Result<Vec<Player>, StoreError> {
        self.docs
            .iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| Player::deserialize(doc).map_err(StoreError::from))
            .collect()
    }

    async fn find_names(&self) -> Result<Vec<PlayerName>, StoreError> {
        self.docs
            .iter()
            .map(|doc| {
                let name = serde_json::json!({
                    "first_name": doc.get("first_name"),
                    "last_name": doc.get("last_name"),
                });
                serde_json::from_value(name).map_err(StoreError::from)
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: i64, first: &str, last: &str, abbr: &str) -> Value {
        json!({
            "id": id,
            "first_name": first,
            "last_name": last,
            "team": {
                "id": 1, "conference": "East", "division": "Atlantic",
                "city": "Boston", "name": "Celtics",
                "full_name": "Boston Celtics", "abbreviation": abbr
            }
        })
    }

    #[actix_rt::test]
    async fn find_one_returns_first_in_order() {
        let store = MemoryStore::new(vec![
            doc(1, "Jaylen", "Brown", "BOS"),
            doc(2, "Jaylen", "Brown", "BOS"),
        ]);
        let f = Filter::new()
            .eq("first_name", "Jaylen")
            .eq("last_name", "Brown");
        let p = store.find_one(&f).await.unwrap().unwrap();
        assert_eq!(p.id, 1);

        let none = store.find_one(&Filter::new().eq("id", 99)).await.unwrap();
        assert!(none.is_none());
    }

    #[actix_rt::test]
    async fn find_filters_on_nested_fields() {
        let store = MemoryStore::new(vec![
            doc(1, "Jayson", "Tatum", "BOS"),
            doc(2, "Jimmy", "Butler", "MIA"),
            doc(3, "Al", "Horford", "BOS"),
        ]);
        let ids: Vec<i64> = store
            .find(&Filter::new().eq("team.abbreviation", "BOS"))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.find(&Filter::new()).await.unwrap().len(), 3);
    }

    #[actix_rt::test]
    async fn malformed_document_fails_the_scan() {
        let store = MemoryStore::new(vec![
            doc(1, "Jayson", "Tatum", "BOS"),
            json!({ "id": 2, "first_name": "No", "last_name": "Team" }),
        ]);
        let err = store.find(&Filter::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[actix_rt::test]
    async fn typed_players_round_trip_through_the_store() {
        let original: Player = serde_json::from_value(doc(7, "Derrick", "White", "BOS")).unwrap();
        let store = MemoryStore::from_players(vec![original.clone()]).unwrap();
        let found = store.find_one(&Filter::new().eq("id", 7)).await.unwrap();
        assert_eq!(found, Some(original));
    }

    #[actix_rt::test]
    async fn names_project_two_fields() {
        let store = MemoryStore::new(vec![doc(1, "Jrue", "Holiday", "BOS")]);
        let names = store.find_names().await.unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].first_name, "Jrue");
        assert_eq!(names[0].last_name, "Holiday");

        let broken = MemoryStore::new(vec![json!({ "first_name": "Only" })]);
        assert!(broken.find_names().await.is_err());
    }
}
