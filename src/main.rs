mod ui;

use anyhow::Context;
use clap::Parser;
use pokemon_duel::battle_logger::BattleLog;
use pokemon_duel::catalog::PokeApiClient;
use pokemon_duel::config::{BattleConfig, CatalogConfig, DEFAULT_API_URL, STARTER_ROSTER};
use pokemon_duel::session::{Opponent, Session};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pokemon-duel", about = "Duel a random Pokémon, one move at a time")]
struct Cli {
    /// Your Pokémon (asked interactively when omitted)
    #[arg(short, long)]
    player: Option<String>,

    /// Seed for move curation, opponent choice and hit rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Catalog base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Write the battle log as JSON to this path
    #[arg(long)]
    log_json: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokemon_duel=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    println!("Welcome to the Pokémon duel!");
    let mut prompt = ui::Prompt::stdin();
    let player = match cli.player {
        Some(name) => name,
        None => prompt
            .choose_creature(&STARTER_ROSTER)
            .await
            .context("no Pokémon chosen")?,
    };

    let catalog = PokeApiClient::new(&CatalogConfig {
        base_url: cli.api_url,
    });
    let session = Session::new(BattleConfig::default(), catalog)?;
    let opponent = Opponent::random(&mut rng);
    let mut battle = session
        .prepare(&player, &opponent, &mut rng)
        .await
        .with_context(|| format!("failed to set up a battle for '{player}'"))?;

    println!("The bot picks {}!", battle.bot().name());
    ui::print_intro(battle.player().name(), battle.bot().name(), session.config().start_hp);

    let mut chooser = ui::StdinChooser::new(prompt);
    let mut observer = (ui::Narrator, BattleLog::new());
    session
        .run(&mut battle, &mut chooser, &mut observer, &mut rng)
        .await
        .context("battle aborted")?;

    if let Some(path) = cli.log_json {
        let (_, log) = observer;
        std::fs::write(&path, serde_json::to_string_pretty(&log.to_json())? + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
