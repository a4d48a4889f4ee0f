//! Per-player board: the authoritative ship list and attack bookkeeping.

use rand::Rng;

use crate::common::{PlacementError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::{Ship, ShipFactory};

/// One player's side of the game: board dimensions plus the ships on it.
#[derive(Debug, Clone)]
pub struct Board {
    width: u32,
    height: u32,
    ships: Vec<Ship>,
}

impl Board {
    /// Build a board from pre-placed ships, validating that every ship is
    /// in bounds and that no two ships overlap or touch.
    pub fn new(width: u32, height: u32, ships: Vec<Ship>) -> Result<Self, PlacementError> {
        for ship in &ships {
            if ship.start().x < 1
                || ship.start().y < 1
                || ship.end().x > width
                || ship.end().y > height
            {
                return Err(PlacementError::OutOfBounds);
            }
        }
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                if a.is_near_ship(b) {
                    return Err(PlacementError::ShipsTooClose);
                }
            }
        }
        Ok(Self {
            width,
            height,
            ships,
        })
    }

    /// Build a board with a freshly generated fleet.
    pub fn generate<R: Rng + ?Sized>(
        factory: &ShipFactory,
        rng: &mut R,
    ) -> Result<Self, PlacementError> {
        let ships = factory.generate(rng)?;
        Ok(Self {
            width: factory.width(),
            height: factory.height(),
            ships,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// `true` when `cell` lies inside `[1, width] x [1, height]`.
    pub fn contains(&self, cell: Coord) -> bool {
        (1..=self.width).contains(&cell.x) && (1..=self.height).contains(&cell.y)
    }

    /// Apply an attack at `cell`. `Sunk` is reported exactly once per
    /// ship, on the hit that completes it; later attacks on the wreck
    /// report `Hit`.
    pub fn apply_attack(&mut self, cell: Coord) -> ShotOutcome {
        for ship in &mut self.ships {
            if ship.occupies(cell) {
                let was_sunk = ship.is_sunk();
                ship.receive_damage(cell);
                return if !was_sunk && ship.is_sunk() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                };
            }
        }
        ShotOutcome::Miss
    }

    /// `true` once every ship on the board is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}
