//! Ship geometry and the fleet placement factory.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use crate::common::PlacementError;
use crate::coord::Coord;

/// A ship occupying a contiguous straight run of cells, with per-cell
/// damage tracking.
///
/// Endpoints are normalized on construction so `start <= end` on both
/// axes. Geometry never changes afterwards; only the damage set grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    start: Coord,
    end: Coord,
    cells: BTreeSet<Coord>,
    damaged: BTreeSet<Coord>,
}

impl Ship {
    /// Build a ship from two endpoints, rejecting non-axis-aligned
    /// geometry. A single-cell ship counts as both horizontal and
    /// vertical and is valid.
    pub fn new(start: Coord, end: Coord) -> Result<Self, PlacementError> {
        let ship = Self::unchecked(start, end);
        if !ship.is_horizontal() && !ship.is_vertical() {
            return Err(PlacementError::InvalidGeometry);
        }
        Ok(ship)
    }

    /// Build a ship without the alignment check. The caller vouches that
    /// the endpoints share a row or a column.
    pub fn unchecked(start: Coord, end: Coord) -> Self {
        let start_n = Coord::new(start.x.min(end.x), start.y.min(end.y));
        let end_n = Coord::new(start.x.max(end.x), start.y.max(end.y));
        let cells = if start_n.x == end_n.x {
            (start_n.y..=end_n.y)
                .map(|y| Coord::new(start_n.x, y))
                .collect()
        } else {
            (start_n.x..=end_n.x)
                .map(|x| Coord::new(x, start_n.y))
                .collect()
        };
        Self {
            start: start_n,
            end: end_n,
            cells,
            damaged: BTreeSet::new(),
        }
    }

    /// Normalized top-left endpoint.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Normalized bottom-right endpoint.
    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// All cells the ship occupies.
    pub fn cells(&self) -> &BTreeSet<Coord> {
        &self.cells
    }

    /// Number of cells the ship occupies.
    pub fn length(&self) -> usize {
        self.cells.len()
    }

    pub fn occupies(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of cells damaged so far.
    pub fn damaged_count(&self) -> usize {
        self.damaged.len()
    }

    pub fn is_damaged(&self, cell: Coord) -> bool {
        self.damaged.contains(&cell)
    }

    /// Register an attack at `cell`. Returns `true` iff the ship occupies
    /// the cell; repeated damage to the same cell is recorded once.
    pub fn receive_damage(&mut self, cell: Coord) -> bool {
        if self.occupies(cell) {
            self.damaged.insert(cell);
            true
        } else {
            false
        }
    }

    /// `true` once every occupied cell is damaged.
    pub fn is_sunk(&self) -> bool {
        self.damaged.len() == self.cells.len()
    }

    /// `true` when `cell` lies within the ship's bounding box dilated by
    /// one cell on every side (Chebyshev distance <= 1, diagonals
    /// included).
    pub fn is_near_cell(&self, cell: Coord) -> bool {
        self.start.x.saturating_sub(1) <= cell.x
            && cell.x <= self.end.x + 1
            && self.start.y.saturating_sub(1) <= cell.y
            && cell.y <= self.end.y + 1
    }

    /// `true` when any cell of `other` is near this ship. Overlapping
    /// ships are always near each other.
    pub fn is_near_ship(&self, other: &Ship) -> bool {
        other.cells.iter().any(|&c| self.is_near_cell(c))
    }
}

const ATTEMPTS_PER_SHIP: u32 = 1_000;
const LAYOUT_RESTARTS: u32 = 50;

/// Fleet configuration: how many ships of each length go on a board of
/// the given dimensions. Stateless; every `generate` call produces a
/// fresh fleet.
#[derive(Debug, Clone)]
pub struct ShipFactory {
    width: u32,
    height: u32,
    ships_per_length: BTreeMap<u32, u32>,
}

impl ShipFactory {
    pub fn new(width: u32, height: u32, ships_per_length: BTreeMap<u32, u32>) -> Self {
        Self {
            width,
            height,
            ships_per_length,
        }
    }

    /// Classic fleet: one ship each of lengths 1 through 5.
    pub fn standard(width: u32, height: u32) -> Self {
        Self::new(width, height, (1..=5).map(|len| (len, 1)).collect())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Generate a full fleet: exactly the configured number of ships per
    /// length, pairwise non-overlapping and non-near, all within
    /// `[1, width] x [1, height]`.
    ///
    /// Placement is rejection sampling with a bounded budget: a fixed
    /// number of attempts per ship, and a fixed number of whole-layout
    /// restarts when a partial layout dead-ends. Configurations that fail
    /// the cheap feasibility checks are rejected up front.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Ship>, PlacementError> {
        self.check_feasible()?;
        for _ in 0..LAYOUT_RESTARTS {
            if let Some(fleet) = self.try_layout(rng) {
                return Ok(fleet);
            }
        }
        Err(PlacementError::PlacementExhausted)
    }

    /// Cheap necessary conditions, checked before any sampling: lengths
    /// and counts are positive, every ship fits along some axis, and the
    /// fleet's total cells do not exceed the board area.
    fn check_feasible(&self) -> Result<(), PlacementError> {
        let area = u64::from(self.width) * u64::from(self.height);
        let mut total_cells = 0u64;
        for (&len, &count) in &self.ships_per_length {
            if len == 0 || count == 0 {
                return Err(PlacementError::InfeasibleFleet);
            }
            if len > self.width.max(self.height) {
                return Err(PlacementError::InfeasibleFleet);
            }
            total_cells += u64::from(len) * u64::from(count);
        }
        if total_cells > area {
            return Err(PlacementError::InfeasibleFleet);
        }
        Ok(())
    }

    fn try_layout<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<Ship>> {
        let mut fleet = Vec::new();
        // Longest ships first: they are the hardest to fit.
        for (&len, &count) in self.ships_per_length.iter().rev() {
            for _ in 0..count {
                let ship = self.place_one(rng, len, &fleet)?;
                fleet.push(ship);
            }
        }
        Some(fleet)
    }

    fn place_one<R: Rng + ?Sized>(&self, rng: &mut R, len: u32, fleet: &[Ship]) -> Option<Ship> {
        let fits_horizontal = len <= self.width;
        let fits_vertical = len <= self.height;
        for _ in 0..ATTEMPTS_PER_SHIP {
            let horizontal = match (fits_horizontal, fits_vertical) {
                (true, true) => rng.random(),
                (true, false) => true,
                (false, true) => false,
                (false, false) => return None,
            };
            let (start, end) = if horizontal {
                let x = rng.random_range(1..=self.width - len + 1);
                let y = rng.random_range(1..=self.height);
                (Coord::new(x, y), Coord::new(x + len - 1, y))
            } else {
                let x = rng.random_range(1..=self.width);
                let y = rng.random_range(1..=self.height - len + 1);
                (Coord::new(x, y), Coord::new(x, y + len - 1))
            };
            let candidate = Ship::unchecked(start, end);
            if fleet.iter().all(|placed| !placed.is_near_ship(&candidate)) {
                return Some(candidate);
            }
        }
        None
    }
}
