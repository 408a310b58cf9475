#![allow(dead_code)]

use async_trait::async_trait;
use pokemon_duel::battle::{MoveChooser, RoundView};
use pokemon_duel::catalog::{Catalog, MoveDetailSource};
use pokemon_duel::error::{CatalogError, ChoiceError};
use pokemon_duel::model::{CreatureRecord, Move, MoveDetail, MoveEntry, MoveRef, MoveSet};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn move_ref(name: &str) -> MoveRef {
    MoveRef {
        name: name.to_string(),
        url: format!("https://catalog.test/move/{name}/"),
    }
}

pub fn creature(name: &str, id: u32, moves: &[&str]) -> CreatureRecord {
    CreatureRecord {
        name: name.to_string(),
        id,
        moves: moves
            .iter()
            .map(|m| MoveEntry {
                move_ref: move_ref(m),
            })
            .collect(),
    }
}

pub fn repeated(name: &str, power: u32, accuracy: u32) -> MoveSet {
    MoveSet::filled(Move::new(name, power, accuracy), 5).expect("valid move")
}

/// In-memory catalog. Moves without a registered detail fail to resolve.
#[derive(Default)]
pub struct FakeCatalog {
    creatures: Vec<CreatureRecord>,
    details: HashMap<String, MoveDetail>,
    lookups: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creature(mut self, record: CreatureRecord) -> Self {
        self.creatures.push(record);
        self
    }

    pub fn with_move(mut self, name: &str, power: Option<u32>, accuracy: Option<u32>) -> Self {
        self.details.insert(
            name.to_string(),
            MoveDetail {
                name: name.to_string(),
                power,
                accuracy,
            },
        );
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl MoveDetailSource for FakeCatalog {
    async fn fetch_move_detail(&self, move_ref: &MoveRef) -> Result<MoveDetail, CatalogError> {
        self.lookups.lock().unwrap().push(move_ref.name.clone());
        self.details
            .get(&move_ref.name)
            .cloned()
            .ok_or_else(|| CatalogError::Unavailable(format!("no detail for {}", move_ref.name)))
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn fetch_creature(&self, name: &str) -> Result<CreatureRecord, CatalogError> {
        self.creatures
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    async fn fetch_creature_by_id(&self, id: u32) -> Result<CreatureRecord, CatalogError> {
        self.creatures
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

/// Always answers with the same index and remembers what it was shown.
pub struct FixedChooser {
    pub index: usize,
    pub views: Vec<RoundView>,
}

impl FixedChooser {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            views: Vec::new(),
        }
    }
}

#[async_trait]
impl MoveChooser for FixedChooser {
    async fn choose_move(&mut self, _moves: &MoveSet, view: &RoundView) -> Result<usize, ChoiceError> {
        self.views.push(view.clone());
        Ok(self.index)
    }
}

/// Answers `0` a number of times, then behaves like a closed input.
pub struct ClosingChooser {
    pub remaining: usize,
}

#[async_trait]
impl MoveChooser for ClosingChooser {
    async fn choose_move(&mut self, _moves: &MoveSet, _view: &RoundView) -> Result<usize, ChoiceError> {
        if self.remaining == 0 {
            return Err(ChoiceError::InputClosed);
        }
        self.remaining -= 1;
        Ok(0)
    }
}
