//! Turn-based duel between a chosen creature and a random opponent.
//!
//! [`curate::MoveCurator`] builds each side's move set from catalog data,
//! [`battle::Battle::resolve`] runs the combat loop, and
//! [`session::Session`] ties both to a [`catalog::Catalog`].

pub mod battle;
pub mod battle_logger;
pub mod catalog;
pub mod config;
pub mod curate;
pub mod error;
pub mod model;
pub mod session;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::battle::{
        Battle, BattleResult, MoveChooser, OpponentPolicy, Outcome, RandomPolicy, RoundView, Side,
    };
    pub use crate::battle_logger::{BattleEvent, BattleLog, BattleObserver, Strike};
    pub use crate::catalog::{Catalog, MoveDetailSource, PokeApiClient};
    pub use crate::config::{BattleConfig, CatalogConfig};
    pub use crate::curate::MoveCurator;
    pub use crate::error::{BattleError, CatalogError, ChoiceError, SessionError};
    pub use crate::model::{Combatant, Move, MoveSet};
    pub use crate::session::{Opponent, Session};
}
