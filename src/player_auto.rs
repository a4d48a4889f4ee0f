//! Hunt/target search strategy for the automatic player.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::coord::{Coord, Direction};
use crate::player::Player;

/// Autonomous player with a two-phase search.
///
/// While hunting it attacks random cells that keep their distance from
/// every confirmed hit. A non-sinking hit opens a streak: the hit cell
/// becomes the anchor and subsequent shots probe outwards from it,
/// walking the current direction while shots keep hitting, then trying
/// the remaining directions from the anchor. A sink, or running out of
/// directions, drops the player back to hunting.
pub struct AutomaticPlayer {
    name: String,
    board: Board,
    /// Every cell ever proposed, in order.
    shots: Vec<Coord>,
    /// Hit/miss outcome per shot, index-aligned with `shots`.
    outcomes: Vec<bool>,
    /// All confirmed hit cells.
    hit_cells: BTreeSet<Coord>,
    /// First hit of the current streak; `None` while hunting.
    anchor: Option<Coord>,
    direction: Direction,
    last_hit_sunk: bool,
}

impl AutomaticPlayer {
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        Self {
            name: name.into(),
            board,
            shots: Vec::new(),
            outcomes: Vec::new(),
            hit_cells: BTreeSet::new(),
            anchor: None,
            direction: Direction::West,
            last_hit_sunk: false,
        }
    }

    /// All cells proposed so far, oldest first.
    pub fn shots(&self) -> &[Coord] {
        &self.shots
    }

    fn tried(&self, cell: Coord) -> bool {
        self.shots.contains(&cell)
    }

    fn near_hit(&self, cell: Coord) -> bool {
        self.hit_cells.iter().any(|&hit| hit.chebyshev(cell) <= 1)
    }

    /// Hunt-phase pick: uniform over untried cells that keep their
    /// distance from every confirmed hit, relaxing to any untried cell
    /// when no such cell remains.
    fn hunt_target(&self, rng: &mut SmallRng) -> Coord {
        let mut open = Vec::new();
        let mut crowded = Vec::new();
        for y in 1..=self.board.height() {
            for x in 1..=self.board.width() {
                let cell = Coord::new(x, y);
                if self.tried(cell) {
                    continue;
                }
                if self.near_hit(cell) {
                    crowded.push(cell);
                } else {
                    open.push(cell);
                }
            }
        }
        open.choose(rng)
            .or_else(|| crowded.choose(rng))
            .copied()
            // Only reachable once every cell has been tried, which the
            // orchestrator never allows while a ship floats; the corner
            // returned here is a repeat by construction.
            .unwrap_or(Coord::new(self.board.width(), self.board.height()))
    }

    /// In-bounds, untried cell one step in `dir` from `from`.
    fn probe(&self, dir: Direction, from: Coord) -> Option<Coord> {
        dir.step(from)
            .filter(|&cell| self.board.contains(cell))
            .filter(|&cell| !self.tried(cell))
    }

    /// Next cell while a streak is live. Walks the current direction on
    /// from the last shot after a hit, then probes the axis-opposite
    /// direction from the anchor, then the perpendicular pair. `None`
    /// once all four directions are exhausted.
    fn streak_target(&mut self, anchor: Coord) -> Option<Coord> {
        if self.outcomes.last().copied().unwrap_or(false) {
            if let Some(last) = self.shots.last().copied() {
                if let Some(cell) = self.probe(self.direction, last) {
                    return Some(cell);
                }
            }
        }
        self.direction = self.direction.opposite();
        if let Some(cell) = self.probe(self.direction, anchor) {
            return Some(cell);
        }
        self.direction = self.direction.opposite().next();
        if let Some(cell) = self.probe(self.direction, anchor) {
            return Some(cell);
        }
        self.direction = self.direction.opposite();
        self.probe(self.direction, anchor)
    }
}

impl Player for AutomaticPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Coord {
        let cell = match self.anchor {
            Some(anchor) if !self.last_hit_sunk => match self.streak_target(anchor) {
                Some(cell) => cell,
                None => {
                    // Boxed-in anchor: the streak cannot be extended, so
                    // drop back to hunting this turn.
                    self.anchor = None;
                    self.direction = Direction::West;
                    self.hunt_target(rng)
                }
            },
            _ => self.hunt_target(rng),
        };
        self.shots.push(cell);
        cell
    }

    fn receive_result(&mut self, outcome: ShotOutcome) {
        self.outcomes.push(outcome.is_hit());
        if outcome.is_hit() {
            if let Some(&cell) = self.shots.last() {
                self.hit_cells.insert(cell);
                if self.anchor.is_none() {
                    self.anchor = Some(cell);
                }
            }
        }
        self.last_hit_sunk = outcome.is_sunk();
        if outcome.is_sunk() {
            self.anchor = None;
            self.direction = Direction::West;
        }
    }
}
