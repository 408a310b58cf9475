mod common;

use common::{creature, ClosingChooser, FakeCatalog, FixedChooser};
use pokemon_duel::battle::BattleResult;
use pokemon_duel::battle_logger::BattleLog;
use pokemon_duel::config::{BattleConfig, OPPONENT_IDS};
use pokemon_duel::error::{BattleError, CatalogError, SessionError};
use pokemon_duel::model::Move;
use pokemon_duel::session::{Opponent, Session};
use rand::rngs::mock::StepRng;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_creature(creature(
            "pikachu",
            25,
            &["thunderbolt", "growl", "quick-attack", "thunder", "slam", "tail-whip"],
        ))
        .with_creature(creature("rattata", 19, &["tackle", "tail-whip", "bite"]))
        .with_move("thunderbolt", Some(90), Some(100))
        .with_move("growl", None, Some(100))
        .with_move("quick-attack", Some(40), Some(100))
        .with_move("thunder", Some(110), Some(70))
        .with_move("slam", Some(80), Some(75))
        .with_move("tail-whip", None, Some(100))
        .with_move("tackle", Some(40), Some(100))
        .with_move("bite", Some(60), Some(100))
}

#[tokio::test]
async fn prepare_builds_both_sides_from_the_catalog() {
    let session = Session::new(BattleConfig::default(), catalog()).unwrap();
    let battle = session
        .prepare("  Pikachu ", &Opponent::Id(19), &mut StepRng::new(0, 0))
        .await
        .unwrap();

    assert_eq!(battle.player().name(), "pikachu");
    assert_eq!(battle.bot().name(), "rattata");
    assert_eq!(battle.player().health(), 300);
    assert_eq!(battle.bot().health(), 300);

    let player: Vec<&str> = battle.player().moves().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(player, ["thunderbolt", "quick-attack", "thunder", "slam", "tackle"]);
    let bot: Vec<&str> = battle.bot().moves().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(bot, ["tackle", "bite", "tackle", "tackle", "tackle"]);
}

#[tokio::test]
async fn unknown_player_stops_before_battle() {
    let session = Session::new(BattleConfig::default(), catalog()).unwrap();
    let mut chooser = FixedChooser::new(0);
    let err = session
        .play(
            "missingno",
            &Opponent::Id(19),
            &mut chooser,
            &mut BattleLog::new(),
            &mut SmallRng::seed_from_u64(1),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::Catalog(CatalogError::NotFound(ref name)) if name == "missingno"));
    assert!(chooser.views.is_empty());
}

#[tokio::test]
async fn unknown_opponent_id_is_fatal() {
    let session = Session::new(BattleConfig::default(), catalog()).unwrap();
    let err = session
        .prepare("pikachu", &Opponent::Id(150), &mut SmallRng::seed_from_u64(1))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, SessionError::Catalog(CatalogError::NotFound(_))));
}

#[tokio::test]
async fn play_runs_to_a_single_outcome() {
    let session = Session::new(BattleConfig::default(), catalog()).unwrap();
    let mut log = BattleLog::new();
    let outcome = session
        .play(
            "pikachu",
            &Opponent::Named("Rattata".to_string()),
            &mut FixedChooser::new(0),
            &mut log,
            &mut SmallRng::seed_from_u64(77),
        )
        .await
        .unwrap();

    assert_eq!(outcome.player, "pikachu");
    assert_eq!(outcome.bot, "rattata");
    assert_ne!(outcome.result, BattleResult::Draw);
    assert!(outcome.player_hp == 0 || outcome.bot_hp == 0);
    assert_eq!(log.outcome(), Some(&outcome));
}

#[tokio::test]
async fn closed_prompt_surfaces_as_battle_error() {
    let session = Session::new(BattleConfig::default(), catalog()).unwrap();
    let mut log = BattleLog::new();
    let err = session
        .play(
            "pikachu",
            &Opponent::Id(19),
            &mut ClosingChooser { remaining: 0 },
            &mut log,
            &mut SmallRng::seed_from_u64(2),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::Battle(BattleError::Choice(_))));
    assert!(log.outcome().is_none());
}

#[tokio::test]
async fn start_hp_comes_from_config() {
    let config = BattleConfig {
        start_hp: 120,
        default_move: Move::new("struggle", 50, 100),
        ..BattleConfig::default()
    };
    let session = Session::new(config, catalog()).unwrap();
    let battle = session
        .prepare("pikachu", &Opponent::Id(19), &mut StepRng::new(0, 0))
        .await
        .unwrap();
    assert_eq!(battle.player().health(), 120);
    assert_eq!(battle.bot().moves()[2].name, "struggle");
}

#[test]
fn invalid_config_is_rejected() {
    let config = BattleConfig {
        default_move: Move::new("splash", 0, 100),
        ..BattleConfig::default()
    };
    assert!(matches!(
        Session::new(config, catalog()),
        Err(SessionError::Config(_))
    ));
}

#[test]
fn random_opponents_come_from_the_first_generation() {
    let mut rng = SmallRng::seed_from_u64(4);
    for _ in 0..500 {
        match Opponent::random(&mut rng) {
            Opponent::Id(id) => assert!(OPPONENT_IDS.contains(&id)),
            other => panic!("unexpected opponent {other:?}"),
        }
    }
}
