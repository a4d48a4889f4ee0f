use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::coord::Coord;
use crate::player::Player;

/// A player attacking uniformly random cells, never repeating one. Run
/// to exhaustion it covers every board cell exactly once.
pub struct RandomPlayer {
    name: String,
    board: Board,
    tried: BTreeSet<Coord>,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        Self {
            name: name.into(),
            board,
            tried: BTreeSet::new(),
        }
    }

    fn random_cell(&self, rng: &mut SmallRng) -> Coord {
        Coord::new(
            rng.random_range(1..=self.board.width()),
            rng.random_range(1..=self.board.height()),
        )
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Rejection-samples until an untried cell turns up.
    fn select_target(&mut self, rng: &mut SmallRng) -> Coord {
        let mut cell = self.random_cell(rng);
        while !self.tried.insert(cell) {
            cell = self.random_cell(rng);
        }
        cell
    }
}
