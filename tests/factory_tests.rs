use std::collections::{BTreeMap, BTreeSet};

use flotilla::{PlacementError, Ship, ShipFactory};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_standard_fleet_on_ten_by_ten() {
    let mut rng = SmallRng::seed_from_u64(42);
    let factory = ShipFactory::standard(10, 10);
    let fleet = factory.generate(&mut rng).unwrap();

    assert_eq!(fleet.len(), 5);
    let mut lengths: Vec<usize> = fleet.iter().map(Ship::length).collect();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![1, 2, 3, 4, 5]);

    for ship in &fleet {
        assert!(ship.start().x >= 1 && ship.start().y >= 1);
        assert!(ship.end().x <= 10 && ship.end().y <= 10);
    }

    // pairwise disjoint cells
    let mut seen = BTreeSet::new();
    for ship in &fleet {
        for &cell in ship.cells() {
            assert!(seen.insert(cell), "ships overlap at {}", cell);
        }
    }

    // strict no-touch rule, diagonals included
    for (i, a) in fleet.iter().enumerate() {
        for b in &fleet[i + 1..] {
            assert!(!a.is_near_ship(b));
        }
    }
}

#[test]
fn test_repeated_lengths() {
    let mut rng = SmallRng::seed_from_u64(7);
    let factory = ShipFactory::new(8, 8, BTreeMap::from([(2, 3), (3, 2)]));
    let fleet = factory.generate(&mut rng).unwrap();

    assert_eq!(fleet.len(), 5);
    assert_eq!(fleet.iter().filter(|s| s.length() == 2).count(), 3);
    assert_eq!(fleet.iter().filter(|s| s.length() == 3).count(), 2);
}

#[test]
fn test_fresh_fleet_per_call() {
    let mut rng = SmallRng::seed_from_u64(9);
    let factory = ShipFactory::standard(10, 10);
    let first = factory.generate(&mut rng).unwrap();
    let second = factory.generate(&mut rng).unwrap();
    // stateless factory: both fleets valid, drawn independently
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[test]
fn test_ship_longer_than_board_is_infeasible() {
    let mut rng = SmallRng::seed_from_u64(1);
    let factory = ShipFactory::new(4, 4, BTreeMap::from([(5, 1)]));
    assert_eq!(
        factory.generate(&mut rng).unwrap_err(),
        PlacementError::InfeasibleFleet
    );
}

#[test]
fn test_zero_entries_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let factory = ShipFactory::new(10, 10, BTreeMap::from([(3, 0)]));
    assert_eq!(
        factory.generate(&mut rng).unwrap_err(),
        PlacementError::InfeasibleFleet
    );
}

#[test]
fn test_overcrowded_board_fails_instead_of_looping() {
    let mut rng = SmallRng::seed_from_u64(1);
    // A 3x3 board cannot hold four length-2 ships under the no-touch rule.
    let factory = ShipFactory::new(3, 3, BTreeMap::from([(2, 4)]));
    let err = factory.generate(&mut rng).unwrap_err();
    assert!(matches!(
        err,
        PlacementError::InfeasibleFleet | PlacementError::PlacementExhausted
    ));
}

#[test]
fn test_tall_narrow_board() {
    let mut rng = SmallRng::seed_from_u64(2);
    // Length 5 only fits vertically here.
    let factory = ShipFactory::new(1, 6, BTreeMap::from([(5, 1)]));
    let fleet = factory.generate(&mut rng).unwrap();
    assert_eq!(fleet.len(), 1);
    assert!(fleet[0].is_vertical());
    assert_eq!(fleet[0].length(), 5);
}
