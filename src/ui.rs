use async_trait::async_trait;
use pokemon_duel::battle::{BattleResult, MoveChooser, RoundView};
use pokemon_duel::battle_logger::{BattleEvent, BattleObserver};
use pokemon_duel::error::ChoiceError;
use pokemon_duel::model::MoveSet;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Numbered-list prompt over stdin.
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Shows `options` numbered from 1 and returns the 0-based pick.
    /// Re-asks on bad input; fails only when stdin closes.
    pub async fn choose(&mut self, message: &str, options: &[String]) -> Result<usize, ChoiceError> {
        loop {
            println!("{message}");
            for (i, option) in options.iter().enumerate() {
                println!(" {}: {}", i + 1, option);
            }
            print!("> ");
            io::stdout().flush()?;

            let line = self.lines.next_line().await?.ok_or(ChoiceError::InputClosed)?;
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice - 1),
                Ok(_) => println!("Out of range, pick 1-{}.", options.len()),
                Err(_) => println!("Invalid input, enter a number."),
            }
        }
    }

    pub async fn choose_creature(&mut self, roster: &[&str]) -> Result<String, ChoiceError> {
        let options: Vec<String> = roster.iter().map(|name| name.to_string()).collect();
        let idx = self.choose("Choose your Pokémon:", &options).await?;
        Ok(options[idx].clone())
    }
}

pub struct StdinChooser {
    prompt: Prompt,
}

impl StdinChooser {
    pub fn new(prompt: Prompt) -> Self {
        Self { prompt }
    }
}

#[async_trait]
impl MoveChooser for StdinChooser {
    async fn choose_move(&mut self, moves: &MoveSet, view: &RoundView) -> Result<usize, ChoiceError> {
        let options: Vec<String> = moves.iter().map(|mv| mv.label()).collect();
        let message = format!("Which move for {}?", view.player);
        self.prompt.choose(&message, &options).await
    }
}

/// Prints battle events as narration.
pub struct Narrator;

impl BattleObserver for Narrator {
    fn on_event(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::RoundStarted {
                round,
                player_hp,
                bot_hp,
            } => {
                println!();
                println!("-- Round {round} --  Your HP: {player_hp} | Bot HP: {bot_hp}");
            }
            BattleEvent::Hit(strike) => println!(
                "{} uses {} and deals {} damage!",
                strike.attacker, strike.move_name, strike.damage
            ),
            BattleEvent::Missed(strike) => println!("{} misses!", strike.attacker),
            BattleEvent::Finished(outcome) => {
                println!();
                println!(
                    "Final HP: {}={} | {}={}",
                    outcome.player, outcome.player_hp, outcome.bot, outcome.bot_hp
                );
                match outcome.result {
                    BattleResult::Draw => println!("It's a draw!"),
                    BattleResult::BotWins => {
                        println!("{} lost! {} wins!", outcome.player, outcome.bot)
                    }
                    BattleResult::PlayerWins => println!("{} wins!", outcome.player),
                }
            }
        }
    }
}

pub fn print_intro(player: &str, bot: &str, start_hp: u32) {
    println!();
    println!("=== {} vs {} ===", player.to_uppercase(), bot.to_uppercase());
    println!("Each side has {start_hp} HP. First to 0 loses!");
}

