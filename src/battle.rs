use crate::battle_logger::{BattleEvent, BattleObserver, Strike};
use crate::error::{BattleError, ChoiceError};
use crate::model::{Combatant, Move, MoveSet};
use async_trait::async_trait;
use rand::Rng;
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleResult {
    PlayerWins,
    BotWins,
    Draw,
}

/// How a finished battle ended. Health values are clamped at zero.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Outcome {
    pub result: BattleResult,
    pub player: String,
    pub bot: String,
    pub player_hp: u32,
    pub bot_hp: u32,
    pub rounds: u32,
}

impl Outcome {
    pub fn winner(&self) -> Option<&str> {
        match self.result {
            BattleResult::PlayerWins => Some(&self.player),
            BattleResult::BotWins => Some(&self.bot),
            BattleResult::Draw => None,
        }
    }
}

/// What the player sees when asked for a move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundView {
    pub round: u32,
    pub player: String,
    pub player_hp: u32,
    pub bot: String,
    pub bot_hp: u32,
}

/// Picks the player's move. This is the only step of a round that may wait.
#[async_trait]
pub trait MoveChooser: Send {
    async fn choose_move(&mut self, moves: &MoveSet, view: &RoundView) -> Result<usize, ChoiceError>;
}

/// Picks the bot's move without waiting.
pub trait OpponentPolicy {
    fn choose_move<R: Rng + ?Sized>(&mut self, moves: &MoveSet, rng: &mut R) -> usize;
}

/// Uniform choice over the move set.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl OpponentPolicy for RandomPolicy {
    fn choose_move<R: Rng + ?Sized>(&mut self, moves: &MoveSet, rng: &mut R) -> usize {
        rng.gen_range(0..moves.len())
    }
}

#[derive(Debug)]
pub struct Battle {
    player: Combatant,
    bot: Combatant,
    round: u32,
    finished: bool,
}

impl Battle {
    pub fn new(player: Combatant, bot: Combatant) -> Self {
        Battle {
            player,
            bot,
            round: 1,
            finished: false,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn bot(&self) -> &Combatant {
        &self.bot
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Bot => &mut self.bot,
        }
    }

    fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Bot => &self.bot,
        }
    }

    fn view(&self) -> RoundView {
        RoundView {
            round: self.round,
            player: self.player.name().to_string(),
            player_hp: self.player.display_health(),
            bot: self.bot.name().to_string(),
            bot_hp: self.bot.display_health(),
        }
    }

    /// Runs rounds until one side drops to zero.
    ///
    /// Each round the player acts first; if that knocks the bot out the round
    /// ends without a reply. A failing chooser aborts the battle with no
    /// outcome.
    pub async fn resolve<C, P, O, R>(
        &mut self,
        chooser: &mut C,
        policy: &mut P,
        observer: &mut O,
        rng: &mut R,
    ) -> Result<Outcome, BattleError>
    where
        C: MoveChooser + ?Sized,
        P: OpponentPolicy,
        O: BattleObserver + ?Sized,
        R: Rng + ?Sized,
    {
        let mut rounds = 0u32;
        let result = loop {
            if let Some(result) = classify(&self.player, &self.bot) {
                break result;
            }
            rounds += 1;
            observer.on_event(&BattleEvent::RoundStarted {
                round: self.round,
                player_hp: self.player.display_health(),
                bot_hp: self.bot.display_health(),
            });

            let view = self.view();
            let index = chooser.choose_move(self.player.moves(), &view).await?;
            let mv = pick(self.player.moves(), index)?;
            self.strike(Side::Player, &mv, observer, rng);

            if !self.bot.is_standing() {
                continue;
            }

            let index = policy.choose_move(self.bot.moves(), rng);
            let mv = pick(self.bot.moves(), index)?;
            self.strike(Side::Bot, &mv, observer, rng);

            self.round += 1;
        };

        self.finished = true;
        let outcome = Outcome {
            result,
            player: self.player.name().to_string(),
            bot: self.bot.name().to_string(),
            player_hp: self.player.display_health(),
            bot_hp: self.bot.display_health(),
            rounds,
        };
        tracing::info!(
            result = ?outcome.result,
            rounds,
            player_hp = outcome.player_hp,
            bot_hp = outcome.bot_hp,
            "battle finished"
        );
        observer.on_event(&BattleEvent::Finished(outcome.clone()));
        Ok(outcome)
    }

    fn strike<O, R>(&mut self, side: Side, mv: &Move, observer: &mut O, rng: &mut R)
    where
        O: BattleObserver + ?Sized,
        R: Rng + ?Sized,
    {
        let hit = roll_hit(mv, rng);
        if hit {
            self.combatant_mut(side.opponent()).take_damage(mv.power);
        }
        let attacker = self.combatant(side);
        let target = self.combatant(side.opponent());
        tracing::debug!(
            round = self.round,
            ?side,
            attacker = attacker.name(),
            mv = %mv.name,
            hit,
            target_hp = target.health(),
            "strike"
        );
        let strike = Strike {
            round: self.round,
            side,
            attacker: attacker.name().to_string(),
            target: target.name().to_string(),
            move_name: mv.name.clone(),
            power: mv.power,
            accuracy: mv.accuracy,
            damage: if hit { mv.power } else { 0 },
            target_hp: target.display_health(),
        };
        let event = if hit {
            BattleEvent::Hit(strike)
        } else {
            BattleEvent::Missed(strike)
        };
        observer.on_event(&event);
    }
}

fn pick(moves: &MoveSet, index: usize) -> Result<Move, BattleError> {
    moves.get(index).cloned().ok_or(BattleError::InvalidChoice {
        index,
        len: moves.len(),
    })
}

/// A move lands when `roll * 100 <= accuracy`, `roll` uniform in `[0, 1)`.
pub fn roll_hit<R: Rng + ?Sized>(mv: &Move, rng: &mut R) -> bool {
    let roll: f64 = rng.gen();
    roll * 100.0 <= f64::from(mv.accuracy)
}

/// `None` while both sides are standing.
pub fn classify(player: &Combatant, bot: &Combatant) -> Option<BattleResult> {
    match (player.is_standing(), bot.is_standing()) {
        (true, true) => None,
        (true, false) => Some(BattleResult::PlayerWins),
        (false, true) => Some(BattleResult::BotWins),
        (false, false) => Some(BattleResult::Draw),
    }
}

pub fn sample_accuracy_hits<R: Rng + ?Sized>(mv: &Move, rng: &mut R, trials: usize) -> usize {
    (0..trials).filter(|_| roll_hit(mv, rng)).count()
}
