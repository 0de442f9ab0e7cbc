//! Boundary to the external data source.
//!
//! Records come back in the provider's own JSON shape. They are consumed only
//! by the builder, which turns them into battle-ready combatants.

pub mod memory;
pub mod pokeapi;

use crate::errors::DataResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use memory::StaticProvider;
pub use pokeapi::PokeApiClient;

/// Source of raw entity, move and type records.
///
/// Entities are looked up by numeric identifier; moves and types by the
/// opaque reference embedded in their parent record.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_entity(&self, id: u32) -> DataResult<RawPokemon>;
    async fn fetch_move(&self, reference: &str) -> DataResult<RawMove>;
    async fn fetch_type(&self, reference: &str) -> DataResult<RawType>;
}

/// A name plus the locator of the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub stats: Vec<RawStat>,
    pub types: Vec<RawTypeSlot>,
    pub moves: Vec<RawMoveSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

/// Raw move record. `accuracy` and `power` are null for status moves; such
/// moves are filtered out by the builder rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMove {
    pub name: String,
    pub accuracy: Option<u32>,
    pub power: Option<u32>,
    pub pp: u32,
    #[serde(rename = "type")]
    pub type_: NamedResource,
    pub damage_class: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawType {
    pub name: String,
    pub damage_relations: RawDamageRelations,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDamageRelations {
    pub double_damage_from: Vec<NamedResource>,
    pub double_damage_to: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
    pub no_damage_to: Vec<NamedResource>,
}
