use battleship_solo::{
    AttackResult, EngineError, Fleet, GameEngine, GamePhase, TargetingMode, Winner, CELL_COUNT,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fixed_engine(human: &[usize], opponent: &[usize]) -> GameEngine {
    GameEngine::with_fleets(
        SmallRng::seed_from_u64(17),
        Fleet::from_cells(human.iter().copied()).unwrap(),
        Fleet::from_cells(opponent.iter().copied()).unwrap(),
    )
}

#[test]
fn test_new_game_is_dealt() {
    let engine = GameEngine::new(SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(engine.generation(), 1);
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);
    assert_eq!(engine.human_fleet().len(), TOTAL_SHIP_CELLS);
    assert_eq!(engine.opponent_cells_remaining(), TOTAL_SHIP_CELLS);
    assert_eq!(engine.check_winner(), None);
}

#[test]
fn test_turns_alternate() {
    let mut engine = fixed_engine(&[0, 1], &[98, 99]);
    let report = engine.player_attack(50).unwrap();
    assert_eq!(report.result, AttackResult::Miss);
    assert!(!report.game_over);
    assert_eq!(engine.phase(), GamePhase::AwaitingOpponentMove);

    assert_eq!(engine.player_attack(51).unwrap_err(), EngineError::NotPlayerTurn);

    engine.opponent_turn().unwrap();
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);
    assert_eq!(engine.opponent_turn().unwrap_err(), EngineError::NotOpponentTurn);
}

#[test]
fn test_player_attack_guards() {
    let mut engine = fixed_engine(&[0, 1], &[98, 99]);
    assert_eq!(
        engine.player_attack(CELL_COUNT).unwrap_err(),
        EngineError::InvalidIndex(CELL_COUNT)
    );
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);

    engine.player_attack(98).unwrap();
    engine.opponent_turn().unwrap();
    assert_eq!(engine.player_attack(98).unwrap_err(), EngineError::AlreadyAttacked(98));
    assert_eq!(engine.opponent_cells_remaining(), 1);
}

#[test]
fn test_human_win_ends_the_game() {
    let mut engine = fixed_engine(&[0, 1], &[98, 99]);
    let first = engine.player_attack(98).unwrap();
    assert_eq!(first.result, AttackResult::Hit);
    assert_eq!(first.winner, None);
    engine.opponent_turn().unwrap();

    let last = engine.player_attack(99).unwrap();
    assert_eq!(last.result, AttackResult::Hit);
    assert!(last.game_over);
    assert_eq!(last.winner, Some(Winner::Human));
    assert_eq!(engine.check_winner(), Some(Winner::Human));
    assert_eq!(engine.phase(), GamePhase::GameOver(Winner::Human));
    assert!(!engine.accepts_attacks());

    assert_eq!(engine.player_attack(10).unwrap_err(), EngineError::GameOver);
    assert_eq!(engine.opponent_turn().unwrap_err(), EngineError::GameOver);
}

#[test]
fn test_empty_human_fleet_means_opponent_wins() {
    let mut engine = fixed_engine(&[], &[98, 99]);
    assert_eq!(engine.check_winner(), Some(Winner::Opponent));
    let report = engine.player_attack(98).unwrap();
    assert_eq!(report.winner, Some(Winner::Opponent));
    assert_eq!(engine.phase(), GamePhase::GameOver(Winner::Opponent));
}

#[test]
fn test_opponent_wins_a_full_game() {
    // a one-cell human fleet against a fleet the player never reaches
    let mut engine = fixed_engine(&[42], &[99]);
    let mut winner = None;
    for index in 0..CELL_COUNT - 1 {
        engine.player_attack(index).unwrap();
        let reply = engine.opponent_turn().unwrap();
        if reply.game_over {
            winner = reply.winner;
            assert_eq!(reply.index, 42);
            break;
        }
    }
    // the opponent attacked 99 distinct cells unless it found 42 first
    match winner {
        Some(w) => assert_eq!(w, Winner::Opponent),
        None => {
            assert_eq!(engine.opponent().available().count_ones(), 1);
            assert!(engine.opponent().is_available(42));
        }
    }
}

#[test]
fn test_restart_resets_everything() {
    let mut engine = GameEngine::new(SmallRng::seed_from_u64(8)).unwrap();
    for index in 0..30 {
        if engine.player_attack(index).unwrap().game_over {
            break;
        }
        if engine.opponent_turn().unwrap().game_over {
            break;
        }
    }

    let summary = engine.restart().unwrap();
    assert_eq!(summary.generation, 2);
    assert_eq!(engine.generation(), 2);
    assert_eq!(summary.human_fleet.len(), TOTAL_SHIP_CELLS);
    assert_eq!(
        summary.human_fleet,
        engine.human_fleet().cells().collect::<Vec<_>>()
    );
    assert_eq!(engine.opponent_cells_remaining(), TOTAL_SHIP_CELLS);
    assert_eq!(engine.opponent().available().count_ones(), CELL_COUNT);
    assert_eq!(engine.opponent().mode(), TargetingMode::Hunt);
    assert!(engine.opponent().hit_stack().is_empty());
    let (hits, misses) = engine.player_marks();
    assert!(hits.is_empty() && misses.is_empty());
    let (hits, misses) = engine.opponent_marks();
    assert!(hits.is_empty() && misses.is_empty());
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);
    assert!(engine.player_attack(0).is_ok());
}

#[test]
fn test_restart_reenables_finished_game() {
    let mut engine = fixed_engine(&[0], &[5]);
    engine.player_attack(5).unwrap();
    assert_eq!(engine.player_attack(6).unwrap_err(), EngineError::GameOver);
    engine.restart().unwrap();
    assert!(engine.accepts_attacks());
    assert_eq!(engine.generation(), 2);
}

#[test]
fn test_seeded_games_finish_and_account_for_every_shot() {
    for seed in 0..20u64 {
        let mut engine = GameEngine::new(SmallRng::seed_from_u64(seed)).unwrap();
        let mut shots = 0;
        let winner = loop {
            let report = engine.player_attack(shots).unwrap();
            shots += 1;
            if let Some(w) = report.winner {
                break w;
            }
            if let Some(w) = engine.opponent_turn().unwrap().winner {
                break w;
            }
        };
        let (hits, misses) = engine.player_marks();
        assert_eq!(hits.count_ones() + misses.count_ones(), shots);
        let (hits, misses) = engine.opponent_marks();
        assert_eq!(
            hits.count_ones() + misses.count_ones() + engine.opponent().available().count_ones(),
            CELL_COUNT
        );
        match winner {
            Winner::Human => assert_eq!(engine.opponent_cells_remaining(), 0),
            Winner::Opponent => {
                assert!(engine.human_fleet().is_empty());
                assert_eq!(hits.count_ones(), TOTAL_SHIP_CELLS);
            }
        }
    }
}
