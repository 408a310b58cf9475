use crate::error::SessionError;
use crate::model::Move;
use std::ops::RangeInclusive;

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/";

/// Creatures offered when the player does not name one.
pub const STARTER_ROSTER: [&str; 10] = [
    "pikachu",
    "charizard",
    "blastoise",
    "venusaur",
    "mewtwo",
    "gengar",
    "dragonite",
    "alakazam",
    "snorlax",
    "eevee",
];

/// National dex ids the opponent is drawn from (first generation).
pub const OPPONENT_IDS: RangeInclusive<u32> = 1..=151;

/// Battle and curation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleConfig {
    /// Size of every curated move set.
    pub max_moves: usize,
    pub start_hp: u32,
    /// How many shuffled candidates curation may look up.
    pub pool_size: usize,
    /// Backfill when too few candidates qualify.
    pub default_move: Move,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            max_moves: 5,
            start_hp: 300,
            pool_size: 20,
            default_move: Move::new("tackle", 40, 100),
        }
    }
}

impl BattleConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.max_moves == 0 {
            return Err(SessionError::Config("max_moves must be > 0"));
        }
        if self.default_move.power == 0 {
            return Err(SessionError::Config("default move must have power"));
        }
        if self.default_move.accuracy > 100 {
            return Err(SessionError::Config("default move accuracy must be <= 100"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
