// Poke Duel Schema - Shared type definitions
// This crate contains the static value types shared by the builder, the
// battle engine and the presentation layer. None of them fetch or mutate.

pub use move_types::*;
pub use pokemon_types::*;
pub use stat_types::*;

pub mod move_types;
pub mod pokemon_types;
pub mod stat_types;
