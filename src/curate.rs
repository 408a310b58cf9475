//! Move-pool curation: turns a creature's raw move list into a fixed-size,
//! battle-ready [`MoveSet`].

use crate::catalog::MoveDetailSource;
use crate::config::BattleConfig;
use crate::error::SessionError;
use crate::model::{Move, MoveDetail, MoveRef, MoveSet};
use rand::Rng;

pub struct MoveCurator {
    max_moves: usize,
    pool_size: usize,
    default_move: Move,
}

impl MoveCurator {
    /// Fails when the config could yield an empty set or a powerless backfill.
    pub fn new(config: &BattleConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            max_moves: config.max_moves,
            pool_size: config.pool_size,
            default_move: config.default_move.clone(),
        })
    }

    /// Picks up to `max_moves` damaging moves from a shuffled prefix of
    /// `candidates`, then backfills with the default move.
    ///
    /// Detail lookups that fail are skipped; curation itself never fails.
    pub async fn curate<S, R>(&self, candidates: &[MoveRef], source: &S, rng: &mut R) -> MoveSet
    where
        S: MoveDetailSource + ?Sized,
        R: Rng + ?Sized,
    {
        let mut pool = candidates.to_vec();
        shuffle(&mut pool, rng);
        pool.truncate(self.pool_size);

        let mut moves = Vec::with_capacity(self.max_moves);
        for candidate in &pool {
            if moves.len() >= self.max_moves {
                break;
            }
            match source.fetch_move_detail(candidate).await {
                Ok(detail) => match usable_move(detail) {
                    Some(mv) => moves.push(mv),
                    None => tracing::debug!(candidate = %candidate.name, "discarded move without power"),
                },
                Err(err) => {
                    tracing::debug!(candidate = %candidate.name, error = %err, "skipped move after failed lookup")
                }
            }
        }

        if moves.len() < self.max_moves {
            tracing::warn!(
                accepted = moves.len(),
                backfill = %self.default_move.name,
                "not enough damaging moves, backfilling"
            );
        }
        moves.resize(self.max_moves, self.default_move.clone());
        MoveSet::from_curated(moves)
    }
}

/// Converts catalog detail into a battle move, if it deals damage.
pub fn usable_move(detail: MoveDetail) -> Option<Move> {
    match detail.power {
        Some(power) if power > 0 => Some(Move {
            name: detail.name,
            power,
            accuracy: detail.accuracy.unwrap_or(100).min(100),
        }),
        _ => None,
    }
}

/// Uniform Fisher–Yates shuffle. Slot `i` draws its element from `i..len`,
/// so a source that always yields zero leaves the order untouched.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let j = rng.gen_range(i..len);
        items.swap(i, j);
    }
}
