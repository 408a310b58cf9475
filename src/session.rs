//! Wires the catalog, curation and the combat loop into one duel.

use crate::battle::{Battle, MoveChooser, Outcome, RandomPolicy};
use crate::battle_logger::BattleObserver;
use crate::catalog::Catalog;
use crate::config::{BattleConfig, OPPONENT_IDS};
use crate::curate::MoveCurator;
use crate::error::SessionError;
use crate::model::{Combatant, CreatureRecord};
use rand::Rng;

/// How the opponent is looked up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Opponent {
    Named(String),
    Id(u32),
}

impl Opponent {
    /// Random first-generation creature.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Opponent::Id(rng.gen_range(OPPONENT_IDS))
    }
}

pub struct Session<C> {
    config: BattleConfig,
    catalog: C,
    curator: MoveCurator,
}

impl<C: Catalog> Session<C> {
    pub fn new(config: BattleConfig, catalog: C) -> Result<Self, SessionError> {
        let curator = MoveCurator::new(&config)?;
        Ok(Session {
            config,
            catalog,
            curator,
        })
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Fetches both creatures and curates their moves. Any creature lookup
    /// failure stops the duel before it starts.
    pub async fn prepare<R: Rng + ?Sized>(
        &self,
        player: &str,
        opponent: &Opponent,
        rng: &mut R,
    ) -> Result<Battle, SessionError> {
        let player_record = self.catalog.fetch_creature(&catalog_name(player)).await?;
        let bot_record = match opponent {
            Opponent::Named(name) => self.catalog.fetch_creature(&catalog_name(name)).await?,
            Opponent::Id(id) => self.catalog.fetch_creature_by_id(*id).await?,
        };

        let player = self.combatant(player_record, rng).await;
        let bot = self.combatant(bot_record, rng).await;
        Ok(Battle::new(player, bot))
    }

    async fn combatant<R: Rng + ?Sized>(&self, record: CreatureRecord, rng: &mut R) -> Combatant {
        let moves = self
            .curator
            .curate(&record.move_refs(), &self.catalog, rng)
            .await;
        tracing::info!(
            name = %record.name,
            moves = ?moves.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            "curated moves"
        );
        Combatant::new(record.name, self.config.start_hp, moves)
    }

    /// Resolves a prepared battle, the bot picking uniformly at random.
    pub async fn run<M, O, R>(
        &self,
        battle: &mut Battle,
        chooser: &mut M,
        observer: &mut O,
        rng: &mut R,
    ) -> Result<Outcome, SessionError>
    where
        M: MoveChooser + ?Sized,
        O: BattleObserver + ?Sized,
        R: Rng + ?Sized,
    {
        let outcome = battle
            .resolve(chooser, &mut RandomPolicy, observer, rng)
            .await?;
        Ok(outcome)
    }

    pub async fn play<M, O, R>(
        &self,
        player: &str,
        opponent: &Opponent,
        chooser: &mut M,
        observer: &mut O,
        rng: &mut R,
    ) -> Result<Outcome, SessionError>
    where
        M: MoveChooser + ?Sized,
        O: BattleObserver + ?Sized,
        R: Rng + ?Sized,
    {
        let mut battle = self.prepare(player, opponent, rng).await?;
        self.run(&mut battle, chooser, observer, rng).await
    }
}

fn catalog_name(name: &str) -> String {
    name.trim().to_lowercase()
}
