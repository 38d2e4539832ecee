use battleship_solo::ui::{coord_to_string, parse_coord, render_player_view, winner_banner};
use battleship_solo::{Fleet, GameEngine, Winner};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_parse_coord_valid() {
    assert_eq!(parse_coord("A1"), Ok(0));
    assert_eq!(parse_coord("j10"), Ok(99));
    assert_eq!(parse_coord(" C7 "), Ok(62));
}

#[test]
fn test_parse_coord_invalid() {
    for bad in ["", "A", "K1", "A0", "A11", "5A", "Ax"] {
        assert!(parse_coord(bad).is_err(), "{:?} should be rejected", bad);
    }
}

#[test]
fn test_coord_labels_round_trip() {
    for index in [0, 9, 62, 90, 99] {
        assert_eq!(parse_coord(&coord_to_string(index)), Ok(index));
    }
    assert_eq!(coord_to_string(62), "C7");
}

#[test]
fn test_view_hides_opponent_ships() {
    let mut engine = GameEngine::with_fleets(
        SmallRng::seed_from_u64(1),
        Fleet::from_cells([0]).unwrap(),
        Fleet::from_cells([55, 56]).unwrap(),
    );
    engine.player_attack(55).unwrap();
    let view = render_player_view(&engine, "Ada");
    let (theirs, ours) = view.split_once("Ada's fleet:").unwrap();
    assert!(theirs.contains('X'));
    assert!(!theirs.contains('S'));
    assert!(ours.lines().nth(2).unwrap().contains('S'));
}

#[test]
fn test_winner_banner() {
    assert!(winner_banner(Winner::Human, "Ada").starts_with("Ada Wins!"));
    assert!(winner_banner(Winner::Opponent, "Ada").starts_with("Computer Wins!"));
}
