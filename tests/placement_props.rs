use battleship_solo::{
    place_fleet, place_ships, resolve_attack, AttackResult, CELL_COUNT, GRID_SIZE, SHIP_SHAPES,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashSet;

/// Cells of one ship form a straight connected run.
fn is_connected_run(cells: &[usize]) -> bool {
    cells.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        let same_row = a / GRID_SIZE == b / GRID_SIZE && b == a + 1;
        let same_col = b == a + GRID_SIZE;
        same_row || same_col
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placed_ships_are_valid_disjoint_and_connected(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = place_ships(&mut rng, &SHIP_SHAPES).unwrap();

        let mut sizes: Vec<usize> = ships.iter().map(|s| s.len()).collect();
        sizes.sort_unstable();
        prop_assert_eq!(sizes, vec![1, 2, 2, 3]);

        let mut seen = HashSet::new();
        for ship in &ships {
            prop_assert!(is_connected_run(ship), "ship {:?} is not connected", ship);
            for &cell in ship {
                prop_assert!(cell < CELL_COUNT);
                prop_assert!(seen.insert(cell), "cell {} shared by two ships", cell);
            }
        }
        prop_assert_eq!(seen.len(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn fleet_holds_every_shape_cell(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut rng, &SHIP_SHAPES).unwrap();
        let expected: usize = SHIP_SHAPES.iter().map(|s| s.size()).sum();
        prop_assert_eq!(fleet.len(), expected);
    }

    #[test]
    fn depletion_is_monotonic(
        seed in any::<u64>(),
        attacks in proptest::collection::vec(0..CELL_COUNT, 1..150),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = place_fleet(&mut rng, &SHIP_SHAPES).unwrap();
        for index in attacks {
            let before = fleet.len();
            let outcome = resolve_attack(index, &mut fleet).unwrap();
            match outcome.result {
                AttackResult::Hit => prop_assert_eq!(fleet.len(), before - 1),
                AttackResult::Miss => prop_assert_eq!(fleet.len(), before),
            }
            prop_assert_eq!(outcome.fleet_depleted, fleet.is_empty());
        }
    }

    #[test]
    fn second_attack_on_same_cell_changes_nothing(seed in any::<u64>(), index in 0..CELL_COUNT) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = place_fleet(&mut rng, &SHIP_SHAPES).unwrap();
        resolve_attack(index, &mut fleet).unwrap();
        let after_first = fleet;
        let second = resolve_attack(index, &mut fleet).unwrap();
        prop_assert_eq!(second.result, AttackResult::Miss);
        prop_assert_eq!(fleet, after_first);
    }
}
