//! In-memory provider for offline runs and tests.

use super::{DataProvider, RawMove, RawPokemon, RawType};
use crate::errors::{DataError, DataResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves records from maps keyed by identifier or reference.
///
/// A lookup miss is reported as a fetch failure, the same way an HTTP
/// provider reports a 404.
#[derive(Debug, Default)]
pub struct StaticProvider {
    entities: HashMap<u32, RawPokemon>,
    moves: HashMap<String, RawMove>,
    types: HashMap<String, RawType>,
    move_fetches: AtomicUsize,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, entity: RawPokemon) -> Self {
        self.entities.insert(entity.id, entity);
        self
    }

    pub fn with_move(mut self, reference: impl Into<String>, record: RawMove) -> Self {
        self.moves.insert(reference.into(), record);
        self
    }

    /// Adds an entity given in the provider's JSON shape.
    pub fn insert_entity_json(&mut self, value: serde_json::Value) -> DataResult<()> {
        let entity: RawPokemon = decode(value, "pokemon")?;
        self.entities.insert(entity.id, entity);
        Ok(())
    }

    /// Adds a move given in the provider's JSON shape.
    pub fn insert_move_json(
        &mut self,
        reference: impl Into<String>,
        value: serde_json::Value,
    ) -> DataResult<()> {
        let record: RawMove = decode(value, "move")?;
        self.moves.insert(reference.into(), record);
        Ok(())
    }

    /// Adds a type given in the provider's JSON shape.
    pub fn insert_type_json(
        &mut self,
        reference: impl Into<String>,
        value: serde_json::Value,
    ) -> DataResult<()> {
        let record: RawType = decode(value, "type")?;
        self.types.insert(reference.into(), record);
        Ok(())
    }

    /// Number of move records requested so far.
    pub fn move_fetches(&self) -> usize {
        self.move_fetches.load(Ordering::Relaxed)
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value, record: &'static str) -> DataResult<T> {
    serde_json::from_value(value).map_err(|err| DataError::parse(record, err.to_string()))
}

#[async_trait]
impl DataProvider for StaticProvider {
    async fn fetch_entity(&self, id: u32) -> DataResult<RawPokemon> {
        self.entities
            .get(&id)
            .cloned()
            .ok_or_else(|| DataError::fetch(format!("pokemon/{}", id), "not found"))
    }

    async fn fetch_move(&self, reference: &str) -> DataResult<RawMove> {
        self.move_fetches.fetch_add(1, Ordering::Relaxed);
        self.moves
            .get(reference)
            .cloned()
            .ok_or_else(|| DataError::fetch(reference, "not found"))
    }

    async fn fetch_type(&self, reference: &str) -> DataResult<RawType> {
        self.types
            .get(reference)
            .cloned()
            .ok_or_else(|| DataError::fetch(reference, "not found"))
    }
}
