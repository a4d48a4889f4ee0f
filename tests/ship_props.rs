use flotilla::{Coord, Ship, ShipFactory};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// length == |x_end - x_start| + |y_end - y_start| + 1 for every valid ship.
    #[test]
    fn ship_length_matches_endpoint_span(
        x in 1u32..=10,
        y in 1u32..=10,
        span in 0u32..=6,
        horizontal in any::<bool>(),
    ) {
        let end = if horizontal {
            Coord::new(x + span, y)
        } else {
            Coord::new(x, y + span)
        };
        let ship = Ship::new(Coord::new(x, y), end).unwrap();
        let extent = (ship.end().x - ship.start().x) + (ship.end().y - ship.start().y) + 1;
        prop_assert_eq!(ship.length() as u32, extent);
        prop_assert_eq!(ship.length() as u32, span + 1);
    }

    /// Damaging an occupied cell twice leaves the damage set unchanged.
    #[test]
    fn damage_is_idempotent(x in 1u32..=10, y in 1u32..=10, span in 0u32..=6) {
        let mut ship = Ship::new(Coord::new(x, y), Coord::new(x + span, y)).unwrap();
        let cell = Coord::new(x, y);
        prop_assert!(ship.receive_damage(cell));
        let after_one = ship.damaged_count();
        prop_assert!(ship.receive_damage(cell));
        prop_assert_eq!(ship.damaged_count(), after_one);
    }

    /// is_sunk() holds exactly when every cell is damaged.
    #[test]
    fn sunk_iff_all_cells_damaged(x in 1u32..=10, y in 1u32..=10, span in 0u32..=6) {
        let mut ship = Ship::new(Coord::new(x, y), Coord::new(x, y + span)).unwrap();
        let cells: Vec<Coord> = ship.cells().iter().copied().collect();
        for (i, cell) in cells.iter().enumerate() {
            prop_assert_eq!(ship.is_sunk(), false);
            prop_assert!(ship.receive_damage(*cell));
            prop_assert_eq!(ship.damaged_count(), i + 1);
        }
        prop_assert!(ship.is_sunk());
    }

    /// The dilated bounding box agrees with cellwise Chebyshev distance.
    #[test]
    fn near_cell_matches_chebyshev_box(
        x in 2u32..=8,
        y in 2u32..=8,
        span in 0u32..=4,
        cx in 1u32..=14,
        cy in 1u32..=14,
    ) {
        let ship = Ship::new(Coord::new(x, y), Coord::new(x + span, y)).unwrap();
        let cell = Coord::new(cx, cy);
        let expected = ship.cells().iter().any(|&c| c.chebyshev(cell) <= 1);
        prop_assert_eq!(ship.is_near_cell(cell), expected);
    }

    /// Every seed yields a valid standard fleet on a 10x10 board.
    #[test]
    fn standard_fleet_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = ShipFactory::standard(10, 10).generate(&mut rng).unwrap();
        prop_assert_eq!(fleet.len(), 5);
        for (i, a) in fleet.iter().enumerate() {
            prop_assert!(a.start().x >= 1 && a.start().y >= 1);
            prop_assert!(a.end().x <= 10 && a.end().y <= 10);
            for b in &fleet[i + 1..] {
                prop_assert!(!a.is_near_ship(b));
            }
        }
    }
}
