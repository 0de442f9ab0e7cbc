//! Runtime configuration for a duel session.
use std::env;

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Session configuration.
///
/// Battle constants (level, IV/EV profile, loadout size, retry cap) are not
/// configurable; see the `pokemon` and `battle` modules.
#[derive(Clone, Debug)]
pub struct DuelConfig {
    /// Base URL of the data provider's REST API.
    pub api_url: String,
    /// Identifiers are drawn uniformly from `1..=species_count`.
    pub species_count: u32,
    /// Maximum number of usable moves gathered before the loadout is picked.
    pub move_candidates: usize,
    /// Fixed seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Consecutive setup failures the interactive loop tolerates.
    pub max_setup_failures: u32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            species_count: 898,
            move_candidates: 10,
            seed: None,
            max_setup_failures: 3,
        }
    }
}

impl DuelConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEDUEL_API_URL` - provider base URL
    /// - `POKEDUEL_SPECIES_COUNT` - size of the identifier universe (default: 898)
    /// - `POKEDUEL_MOVE_CANDIDATES` - cap on usable move candidates (default: 10)
    /// - `POKEDUEL_SEED` - fixed RNG seed (default: entropy)
    /// - `POKEDUEL_MAX_SETUP_FAILURES` - tolerated consecutive setup failures (default: 3)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("POKEDUEL_API_URL") {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                config.api_url = url.to_string();
            }
        }
        if let Some(count) = read_env::<u32>("POKEDUEL_SPECIES_COUNT") {
            config.species_count = count.max(1);
        }
        if let Some(cap) = read_env::<usize>("POKEDUEL_MOVE_CANDIDATES") {
            config.move_candidates = cap;
        }
        config.seed = read_env::<u64>("POKEDUEL_SEED");
        if let Some(limit) = read_env::<u32>("POKEDUEL_MAX_SETUP_FAILURES") {
            config.max_setup_failures = limit.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
