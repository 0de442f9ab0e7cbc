// In: src/lib.rs

//! Poke Duel Battle Engine
//!
//! Builds two combatants from an external data provider and lets them fight
//! it out, one strictly alternating turn at a time, until one of them runs
//! out of HP.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod builder;
pub mod config;
pub mod errors;
pub mod moves;
pub mod pokemon;
pub mod provider;
pub mod rng;
pub mod session;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{DamageRelation, DamageRelations, Element, MoveCategory, StatType};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::calculators::{compute_damage, compute_modifier};
pub use battle::effectiveness::{resolve_effectiveness, Effectiveness};
pub use battle::engine::{resolve_turn, run_battle, run_turn, TurnOutcome};
pub use battle::state::{BattleEvent, BattleState, EventBus, GameState};

// Domain types and construction.
pub use builder::CombatantBuilder;
pub use moves::Move;
pub use pokemon::Combatant;
pub use rng::BattleRng;

// Data access.
pub use provider::{DataProvider, PokeApiClient, StaticProvider};

// Session handling and configuration.
pub use config::DuelConfig;
pub use session::{prepare_duel, read_bet, settle_bet, BetChoice, BetResult};

// Crate-specific error and result types.
pub use errors::{DataError, DataResult, SessionError, SessionResult};
