use crate::battle::{BattleResult, Outcome, Side};
use serde::Serialize;
use serde_json::json;

/// A single attack attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Strike {
    pub round: u32,
    pub side: Side,
    pub attacker: String,
    pub target: String,
    pub move_name: String,
    pub power: u32,
    pub accuracy: u32,
    /// Zero on a miss.
    pub damage: u32,
    /// Target health after the strike, clamped at zero.
    pub target_hp: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
        player_hp: u32,
        bot_hp: u32,
    },
    Hit(Strike),
    Missed(Strike),
    Finished(Outcome),
}

/// Sink for everything that happens during a battle.
pub trait BattleObserver {
    fn on_event(&mut self, event: &BattleEvent);
}

impl<A: BattleObserver, B: BattleObserver> BattleObserver for (A, B) {
    fn on_event(&mut self, event: &BattleEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

impl<O: BattleObserver + ?Sized> BattleObserver for &mut O {
    fn on_event(&mut self, event: &BattleEvent) {
        (**self).on_event(event);
    }
}

/// Records events and renders them as a protocol-style log.
#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    events: Vec<BattleEvent>,
    log: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }

    /// Strikes in order, hits and misses alike.
    pub fn strikes(&self) -> impl Iterator<Item = (bool, &Strike)> {
        self.events.iter().filter_map(|event| match event {
            BattleEvent::Hit(strike) => Some((true, strike)),
            BattleEvent::Missed(strike) => Some((false, strike)),
            _ => None,
        })
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.events.iter().rev().find_map(|event| match event {
            BattleEvent::Finished(outcome) => Some(outcome),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "log": self.log,
            "events": self.events,
        })
    }

    fn push_line(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::RoundStarted { round, .. } => self.log.push(format!("|turn|{round}")),
            BattleEvent::Hit(strike) => {
                self.log.push(move_line(strike));
                self.log.push(format!(
                    "|-damage|{}|{}",
                    side_ident(strike.side.opponent(), &strike.target),
                    strike.target_hp
                ));
            }
            BattleEvent::Missed(strike) => {
                self.log.push(move_line(strike));
                self.log.push(format!(
                    "|-miss|{}|{}",
                    side_ident(strike.side, &strike.attacker),
                    side_ident(strike.side.opponent(), &strike.target)
                ));
            }
            BattleEvent::Finished(outcome) => match outcome.result {
                BattleResult::Draw => self.log.push("|tie|".to_string()),
                _ => {
                    if let Some(winner) = outcome.winner() {
                        self.log.push(format!("|win|{winner}"));
                    }
                }
            },
        }
    }
}

impl BattleObserver for BattleLog {
    fn on_event(&mut self, event: &BattleEvent) {
        self.push_line(event);
        self.events.push(event.clone());
    }
}

fn move_line(strike: &Strike) -> String {
    format!(
        "|move|{}|{}|{}",
        side_ident(strike.side, &strike.attacker),
        strike.move_name,
        side_ident(strike.side.opponent(), &strike.target)
    )
}

pub fn side_ident(side: Side, name: &str) -> String {
    let slot = match side {
        Side::Player => "p1a",
        Side::Bot => "p2a",
    };
    format!("{slot}: {name}")
}
