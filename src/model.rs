use crate::error::MoveSetError;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A named attack with fixed damage and hit chance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    /// Damage dealt on a hit. Always positive for moves that reach a battle.
    pub power: u32,
    /// Hit chance in percent, `0..=100`.
    #[serde(default = "default_accuracy")]
    pub accuracy: u32,
}

pub(crate) fn default_accuracy() -> u32 {
    100
}

impl Move {
    pub fn new(name: impl Into<String>, power: u32, accuracy: u32) -> Self {
        Move {
            name: name.into(),
            power,
            accuracy,
        }
    }

    /// Label shown in move prompts, e.g. `thunderbolt (P:90, A:100)`.
    pub fn label(&self) -> String {
        format!("{} (P:{}, A:{})", self.name, self.power, self.accuracy)
    }
}

/// The fixed moves a combatant fights with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    /// Builds a move set from hand-picked moves, rejecting anything the
    /// resolver could not fight with.
    ///
    /// Any non-empty length is accepted; only curated sets are held to
    /// `max_moves`.
    pub fn new(moves: Vec<Move>) -> Result<Self, MoveSetError> {
        if moves.is_empty() {
            return Err(MoveSetError::Empty);
        }
        for mv in &moves {
            if mv.power == 0 {
                return Err(MoveSetError::ZeroPower(mv.name.clone()));
            }
            if mv.accuracy > 100 {
                return Err(MoveSetError::AccuracyOutOfRange {
                    name: mv.name.clone(),
                    accuracy: mv.accuracy,
                });
            }
        }
        Ok(MoveSet { moves })
    }

    /// `count` copies of the same move.
    pub fn filled(mv: Move, count: usize) -> Result<Self, MoveSetError> {
        MoveSet::new(vec![mv; count])
    }

    // Curated moves are filtered on the way in.
    pub(crate) fn from_curated(moves: Vec<Move>) -> Self {
        MoveSet { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl Index<usize> for MoveSet {
    type Output = Move;

    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// One side of a battle.
#[derive(Debug, Clone)]
pub struct Combatant {
    name: String,
    health: i32,
    moves: MoveSet,
}

impl Combatant {
    pub fn new(name: impl Into<String>, start_hp: u32, moves: MoveSet) -> Self {
        Combatant {
            name: name.into(),
            health: i32::try_from(start_hp).unwrap_or(i32::MAX),
            moves,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Raw health; negative once the combatant has been knocked past zero.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Health as shown to players, never below zero.
    pub fn display_health(&self) -> u32 {
        self.health.max(0) as u32
    }

    pub fn is_standing(&self) -> bool {
        self.health > 0
    }

    pub(crate) fn take_damage(&mut self, damage: u32) {
        let damage = i32::try_from(damage).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(damage);
    }
}

/// Reference to a move as listed on a creature record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: MoveRef,
}

/// Creature as returned by the catalog. Only the fields the duel needs are
/// kept; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

impl CreatureRecord {
    pub fn move_refs(&self) -> Vec<MoveRef> {
        self.moves.iter().map(|m| m.move_ref.clone()).collect()
    }
}

/// Move detail as returned by the catalog. Status moves have no power.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoveDetail {
    pub name: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_health_is_clamped() {
        let moves = MoveSet::filled(Move::new("tackle", 40, 100), 5).unwrap();
        let mut mon = Combatant::new("eevee", 30, moves);
        mon.take_damage(40);
        assert_eq!(mon.health(), -10);
        assert_eq!(mon.display_health(), 0);
        assert!(!mon.is_standing());
    }

    #[test]
    fn move_set_rejects_unusable_moves() {
        assert_eq!(MoveSet::new(Vec::new()), Err(MoveSetError::Empty));
        assert_eq!(
            MoveSet::new(vec![Move::new("growl", 0, 100)]),
            Err(MoveSetError::ZeroPower("growl".to_string()))
        );
        assert!(matches!(
            MoveSet::new(vec![Move::new("odd", 10, 120)]),
            Err(MoveSetError::AccuracyOutOfRange { accuracy: 120, .. })
        ));
    }

    #[test]
    fn creature_record_parses_catalog_payload() {
        let raw = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "moves": [
                {"move": {"name": "mega-punch", "url": "https://pokeapi.co/api/v2/move/5/"},
                 "version_group_details": []},
                {"move": {"name": "thunderbolt", "url": "https://pokeapi.co/api/v2/move/85/"}}
            ]
        }"#;
        let record: CreatureRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, 25);
        let refs = record.move_refs();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1].name, "thunderbolt");
    }

    #[test]
    fn move_detail_accepts_null_power() {
        let detail: MoveDetail =
            serde_json::from_str(r#"{"name": "growl", "power": null, "accuracy": 100}"#).unwrap();
        assert_eq!(detail.power, None);
        assert_eq!(detail.accuracy, Some(100));
    }
}
